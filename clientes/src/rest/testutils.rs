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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use clientes_core::db::Db;
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(clientes_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Closes the database so that any further operation fails.
    pub(crate) async fn break_db(&self) {
        self.db.close().await;
    }

    pub(crate) async fn put_client(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Client {
        let new = NewClient::new(Some(name.to_owned()), email.to_owned(), phone.map(str::to_owned));
        db::create_client(&mut self.db.ex().await.unwrap(), &new).await.unwrap()
    }

    pub(crate) async fn get_client(&self, id: ClientId) -> Option<Client> {
        db::get_client(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    pub(crate) async fn count_clients(&self) -> u64 {
        db::count_clients(&mut self.db.ex().await.unwrap()).await.unwrap()
    }
}
