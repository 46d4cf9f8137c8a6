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

//! Entry point to the Clientes REST service.

#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use clientes::config::Config;
use clientes::db::init_schema;
use clientes::serve;
use clientes_core::db::Db;
use log::{error, info};
use std::error::Error;
use std::net::Ipv4Addr;
use std::process;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Waits until the user asks the server to stop.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Cannot wait for Ctrl-C: {}", e);
    }
    info!("Shutting down");
}

/// Prepares the database and serves requests until shutdown.
async fn start(port: u16, db: Arc<dyn Db + Send + Sync>) -> Result<(), Box<dyn Error>> {
    init_schema(&mut db.ex().await?).await?;

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
    info!("Servidor rodando na porta {}", port);
    info!("Documentação da API em http://localhost:{}/api-docs", port);

    serve(listener, db, shutdown_signal()).await?;
    Ok(())
}

/// Loads the configuration and runs the service, closing the database on the way out.
async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    info!("Using {:?}", config.db);

    let db = config.db.connect().await?;
    let result = start(config.port, db.clone()).await;
    db.close().await;
    result
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        process::exit(1);
    }
}
