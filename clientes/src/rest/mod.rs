// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST interface for the service.

use crate::driver::Driver;
use axum::Router;

mod api_docs_get;
mod by_name_get;
mod client_delete;
mod client_get;
mod client_put;
mod clients_get;
mod clients_post;
mod count_get;
mod openapi;
mod openapi_get;
#[cfg(test)]
mod testutils;

/// Creates the router for the service.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/clientes", get(clients_get::handler).post(clients_post::handler))
        .route("/clientes/", get(clients_get::handler).post(clients_post::handler))
        .route("/clientes/contar", get(count_get::handler))
        .route("/clientes/nome/:nome", get(by_name_get::handler))
        .route(
            "/clientes/:id",
            get(client_get::handler).put(client_put::handler).delete(client_delete::handler),
        )
        .route("/api-docs", get(api_docs_get::handler))
        .route("/api-docs/openapi.json", get(openapi_get::handler))
        .with_state(driver)
}
