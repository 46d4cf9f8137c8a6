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

//! API to update an existing client.

use crate::driver::{Driver, CLIENT_NOT_FOUND};
use crate::model::{Client, ClientFields, ClientId};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use clientes_core::rest::{ErrorResponse, RestError};

/// Atualiza um cliente existente.
///
/// Only the fields present in the request are modified.
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    operation_id = "updateCliente",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    request_body = ClientFields,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 400, description = "ID inválido", body = ErrorResponse),
        (status = 404, description = "Cliente não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse),
    )
)]
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    Json(fields): Json<ClientFields>,
) -> Result<impl IntoResponse, RestError> {
    let id = id.parse::<ClientId>()?;
    match driver.update_client(id, fields).await? {
        Some(client) => Ok(Json(client)),
        None => Err(RestError::NotFound(CLIENT_NOT_FOUND.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use clientes_core::rest::testutils::*;
    use serde_json::json;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/clientes/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let client = context.put_client("Pablo", "pablo@email.com", None).await;

        let response = OneShotBuilder::new(context.app(), route(&client.id().to_string()))
            .send_json(json!({"phone": "11999999999"}))
            .await
            .expect_json::<Client>()
            .await;
        let exp_client = Client::new(
            *client.id(),
            Some("Pablo".to_owned()),
            Some("pablo@email.com".to_owned()),
            Some("11999999999".to_owned()),
        );
        assert_eq!(exp_client, response);
        assert_eq!(Some(exp_client), context.get_client(*client.id()).await);
    }

    #[tokio::test]
    async fn test_empty_update() {
        let context = TestContext::setup().await;

        let client = context.put_client("Pablo", "pablo@email.com", Some("123")).await;

        let response = OneShotBuilder::new(context.app(), route(&client.id().to_string()))
            .send_json(json!({}))
            .await
            .expect_json::<Client>()
            .await;
        assert_eq!(client, response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("5"))
            .send_json(json!({"name": "X"}))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Cliente não encontrado$")
            .await;
        assert_eq!(0, context.count_clients().await);
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("1x"))
            .send_json(json!({"name": "X"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("ID de cliente inválido")
            .await;
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let context = TestContext::setup().await;
        context.break_db().await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_json(json!({"name": "X"}))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error(".+")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route("1"));
}
