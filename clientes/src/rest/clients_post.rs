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

//! API to create a new client.

use crate::driver::Driver;
use crate::model::{Client, ClientFields};
use axum::extract::State;
use axum::http;
use axum::response::IntoResponse;
use axum::Json;
use clientes_core::rest::{ErrorResponse, RestError};

/// Cria um novo cliente.
#[utoipa::path(
    post,
    path = "/clientes",
    operation_id = "createCliente",
    tag = "Clientes",
    request_body = ClientFields,
    responses(
        (status = 201, description = "Cliente criado com sucesso", body = Client),
        (status = 400, description = "Dados inválidos", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse),
    )
)]
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(fields): Json<ClientFields>,
) -> Result<impl IntoResponse, RestError> {
    let client = driver.create_client(fields).await?;
    Ok((http::StatusCode::CREATED, Json(client)))
}
