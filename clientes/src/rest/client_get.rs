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

//! API to get a single client.

use crate::driver::{Driver, CLIENT_NOT_FOUND};
use crate::model::{Client, ClientId};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use clientes_core::rest::{EmptyBody, ErrorResponse, RestError};

/// Retorna um cliente específico pelo ID.
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    operation_id = "getClienteById",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Client),
        (status = 400, description = "ID inválido", body = ErrorResponse),
        (status = 404, description = "Cliente não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse),
    )
)]
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let id = id.parse::<ClientId>()?;
    match driver.get_client(id).await? {
        Some(client) => Ok(Json(client)),
        None => Err(RestError::NotFound(CLIENT_NOT_FOUND.to_owned())),
    }
}
