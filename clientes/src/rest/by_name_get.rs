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

//! API to find clients by name.

use crate::driver::Driver;
use crate::model::Client;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use clientes_core::rest::{EmptyBody, ErrorResponse, RestError};

/// Retorna clientes por nome.
///
/// Matches all clients whose name contains the given text, respecting case.
#[utoipa::path(
    get,
    path = "/clientes/nome/{nome}",
    operation_id = "getClientesByNome",
    tag = "Clientes",
    params(("nome" = String, Path, description = "Nome (ou parte) do cliente")),
    responses(
        (status = 200, description = "Lista de clientes encontrados", body = Vec<Client>),
        (status = 500, description = "Erro interno", body = ErrorResponse),
    )
)]
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(name): Path<String>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let clients = driver.find_clients_by_name(&name).await?;
    Ok(Json(clients))
}
