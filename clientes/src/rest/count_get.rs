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

//! API to count all clients.

use crate::driver::Driver;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use clientes_core::rest::{EmptyBody, ErrorResponse, RestError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned by the count API.
#[derive(Deserialize, Serialize, ToSchema)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct CountResponse {
    /// Total number of clients.
    #[schema(example = 5)]
    pub(crate) count: u64,
}

/// Retorna o número total de clientes.
#[utoipa::path(
    get,
    path = "/clientes/contar",
    operation_id = "countClientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Contagem total", body = CountResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse),
    )
)]
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let count = driver.count_clients().await?;
    Ok(Json(CountResponse { count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use clientes_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/clientes/contar".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<CountResponse>()
            .await;
        assert_eq!(CountResponse { count: 0 }, response);

        context.put_client("Pablo", "pablo@email.com", None).await;
        context.put_client("Maria", "maria@email.com", None).await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<CountResponse>()
            .await;
        assert_eq!(CountResponse { count: 2 }, response);
    }

    #[tokio::test]
    async fn test_does_not_match_id_route() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(serde_json::json!({"count": 0}), response);
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let context = TestContext::setup().await;
        context.break_db().await;

        OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error(".+")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
