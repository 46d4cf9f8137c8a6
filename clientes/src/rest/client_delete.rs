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

//! API to delete a client.

use crate::driver::Driver;
use crate::model::ClientId;
use axum::extract::{Path, State};
use axum::http;
use axum::response::IntoResponse;
use clientes_core::rest::{EmptyBody, ErrorResponse, RestError};

/// Deleta um cliente pelo ID.
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    operation_id = "deleteCliente",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente deletado (No Content)"),
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
    driver.delete_client(id).await?;
    Ok(http::StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use clientes_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::DELETE, format!("/clientes/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let pablo = context.put_client("Pablo", "pablo@email.com", None).await;
        let maria = context.put_client("Maria", "maria@email.com", None).await;

        OneShotBuilder::new(context.app(), route(&pablo.id().to_string()))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        assert_eq!(None, context.get_client(*pablo.id()).await);
        assert_eq!(Some(maria.clone()), context.get_client(*maria.id()).await);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        let pablo = context.put_client("Pablo", "pablo@email.com", None).await;

        for _ in 0..2 {
            OneShotBuilder::new(context.app(), route("2"))
                .send_empty()
                .await
                .expect_status(http::StatusCode::NOT_FOUND)
                .expect_error("^Cliente não encontrado$")
                .await;
        }
        assert_eq!(Some(pablo), context.get_client(crate::model::ClientId::new(1)).await);
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("uno"))
            .send_empty()
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
            .send_empty()
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error(".+")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
