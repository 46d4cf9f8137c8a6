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

//! API to fetch the OpenAPI document.

use crate::rest::openapi::ApiDoc;
use axum::response::IntoResponse;
use axum::Json;
use utoipa::OpenApi;

/// Serves the OpenAPI document describing this service.
pub(crate) async fn handler() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use clientes_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api-docs/openapi.json".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert!(response["openapi"].as_str().unwrap().starts_with("3."));
        assert_eq!("API de Clientes", response["info"]["title"]);
        assert_eq!(
            "createCliente",
            response["paths"]["/clientes"]["post"]["operationId"]
        );
        assert!(response["paths"]["/clientes/{id}"]["delete"]["responses"]["204"].is_object());
    }
}
