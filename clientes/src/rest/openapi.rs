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

//! OpenAPI description of the REST interface.

use crate::model::{Client, ClientFields};
use crate::rest::count_get::CountResponse;
use crate::rest::{
    by_name_get, client_delete, client_get, client_put, clients_get, clients_post, count_get,
};
use clientes_core::rest::ErrorResponse;
use utoipa::OpenApi;

/// Root of the OpenAPI document, aggregating all handlers and schemas.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Clientes",
        version = "1.0.0",
        description = "API RESTful para CRUD de Clientes."
    ),
    servers((url = "http://localhost:3000", description = "Servidor de Desenvolvimento")),
    paths(
        clients_get::handler,
        count_get::handler,
        by_name_get::handler,
        client_get::handler,
        clients_post::handler,
        client_put::handler,
        client_delete::handler
    ),
    components(schemas(Client, ClientFields, CountResponse, ErrorResponse)),
    tags((name = "Clientes", description = "Gerenciamento de clientes"))
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info() {
        let doc = ApiDoc::openapi();
        assert_eq!("API de Clientes", doc.info.title);
        assert_eq!("1.0.0", doc.info.version);

        let servers = doc.servers.unwrap();
        assert_eq!(1, servers.len());
        assert_eq!("http://localhost:3000", servers[0].url);
    }

    #[test]
    fn test_paths() {
        let doc = ApiDoc::openapi();

        let mut paths = doc.paths.paths.keys().cloned().collect::<Vec<String>>();
        paths.sort();
        assert_eq!(
            vec!["/clientes", "/clientes/contar", "/clientes/nome/{nome}", "/clientes/{id}"],
            paths
        );

        let item = &doc.paths.paths["/clientes/{id}"];
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(item.post.is_none());
    }

    #[test]
    fn test_schemas() {
        let doc = ApiDoc::openapi();

        let schemas = doc.components.unwrap().schemas;
        for name in ["Client", "ClientFields", "CountResponse", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "Schema {} missing", name);
        }
    }
}
