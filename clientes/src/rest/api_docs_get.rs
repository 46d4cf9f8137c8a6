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

//! API to render the interactive documentation.

use axum::response::{Html, IntoResponse};

/// Page that renders the OpenAPI document with Swagger UI.
const API_DOCS_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>API de Clientes</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui">
    <p>
      Carregando a documentação interativa...  Se ela não aparecer, consulte o documento
      OpenAPI diretamente em <a href="/api-docs/openapi.json">/api-docs/openapi.json</a>.
    </p>
  </div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

/// Serves the documentation UI.
pub(crate) async fn handler() -> impl IntoResponse {
    Html(API_DOCS_HTML)
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use clientes_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api-docs".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response =
            OneShotBuilder::new(context.app(), route()).send_empty().await.take_response().await;
        assert_eq!(
            "text/html; charset=utf-8",
            response.headers().get(http::header::CONTENT_TYPE).unwrap().to_str().unwrap()
        );

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_text("/api-docs/openapi.json")
            .await;
    }

    #[tokio::test]
    async fn test_page_content() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_text(r##"dom_id: "#swagger-ui","##)
            .await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_text(r#"<a href="/api-docs/openapi.json">/api-docs/openapi.json</a>"#)
            .await;
    }
}
