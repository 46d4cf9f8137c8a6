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

//! Operations on clients.

use crate::db;
use crate::driver::{Driver, CLIENT_NOT_FOUND, EMAIL_REQUIRED};
use crate::model::*;
use clientes_core::db::DbError;
use clientes_core::driver::{DriverError, DriverResult};
use log::info;

impl Driver {
    /// Creates a new client from the caller-supplied `fields`.
    ///
    /// The email is mandatory: a missing or blank email is rejected before touching the database.
    pub(crate) async fn create_client(self, fields: ClientFields) -> DriverResult<Client> {
        let email = match fields.email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(DriverError::InvalidInput(EMAIL_REQUIRED.to_owned())),
        };
        let new = NewClient::new(fields.name, email, fields.phone);

        let client = db::create_client(&mut self.db.ex().await?, &new).await?;
        info!("Created client {}", client.id());
        Ok(client)
    }

    /// Gets all clients.
    pub(crate) async fn get_clients(self) -> DriverResult<Vec<Client>> {
        let clients = db::get_clients(&mut self.db.ex().await?).await?;
        Ok(clients)
    }

    /// Gets the client identified by `id`, if any.
    pub(crate) async fn get_client(self, id: ClientId) -> DriverResult<Option<Client>> {
        let client = db::get_client(&mut self.db.ex().await?, id).await?;
        Ok(client)
    }

    /// Gets all clients whose name contains `text`.
    pub(crate) async fn find_clients_by_name(self, text: &str) -> DriverResult<Vec<Client>> {
        let clients = db::find_clients_by_name(&mut self.db.ex().await?, text).await?;
        Ok(clients)
    }

    /// Counts all clients.
    pub(crate) async fn count_clients(self) -> DriverResult<u64> {
        let count = db::count_clients(&mut self.db.ex().await?).await?;
        Ok(count)
    }

    /// Updates the client identified by `id` with the values present in `fields`.  Returns the
    /// updated client, or `None` if it does not exist.
    pub(crate) async fn update_client(
        self,
        id: ClientId,
        fields: ClientFields,
    ) -> DriverResult<Option<Client>> {
        let client = db::update_client(&mut self.db.ex().await?, id, &fields).await?;
        if client.is_some() {
            info!("Updated client {}", id);
        }
        Ok(client)
    }

    /// Deletes the client identified by `id`.
    pub(crate) async fn delete_client(self, id: ClientId) -> DriverResult<()> {
        match db::delete_client(&mut self.db.ex().await?, id).await {
            Ok(()) => {
                info!("Deleted client {}", id);
                Ok(())
            }
            Err(DbError::NotFound) => Err(DriverError::NotFound(CLIENT_NOT_FOUND.to_owned())),
            Err(e) => Err(e.into()),
        }
    }
}
