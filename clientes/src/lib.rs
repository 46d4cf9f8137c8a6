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

//! Clientes: REST service to manage client records.

#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use clientes_core::db::Db;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod config;
pub mod db;
mod driver;
use driver::Driver;
pub(crate) mod model;
mod rest;
use rest::app;

/// Serves the REST API on `listener` using `db` for persistence until `shutdown` completes.
///
/// The caller retains ownership of `db` and is responsible for closing it afterwards.
pub async fn serve<F>(
    listener: TcpListener,
    db: Arc<dyn Db + Send + Sync>,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let driver = Driver::new(db);
    let app = app(driver);

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}
