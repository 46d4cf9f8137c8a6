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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::{Client, ClientFields, ClientId, NewClient};
use clientes_core::db::postgres;
use clientes_core::db::sqlite;
use clientes_core::db::{DbError, DbResult, Executor};
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;


/// Columns to fetch to build a `Client`, in the order expected by the `*_row_to_client` helpers.
const CLIENT_COLUMNS: &str = "id, name, email, phone";

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

/// Converts a PostgreSQL `row` into a `Client`.
fn pg_row_to_client(row: PgRow) -> DbResult<Client> {
    let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
    let name: Option<String> = row.try_get("name").map_err(postgres::map_sqlx_error)?;
    let email: Option<String> = row.try_get("email").map_err(postgres::map_sqlx_error)?;
    let phone: Option<String> = row.try_get("phone").map_err(postgres::map_sqlx_error)?;
    Ok(Client::new(ClientId::new(id), name, email, phone))
}

/// Converts a SQLite `row` into a `Client`.
fn sqlite_row_to_client(row: SqliteRow) -> DbResult<Client> {
    let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
    let name: Option<String> = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
    let email: Option<String> = row.try_get("email").map_err(sqlite::map_sqlx_error)?;
    let phone: Option<String> = row.try_get("phone").map_err(sqlite::map_sqlx_error)?;
    Ok(Client::new(ClientId::new(id), name, email, phone))
}

/// Converts a raw row `count` into an unsigned quantity.
fn to_count(count: i64) -> DbResult<u64> {
    u64::try_from(count)
        .map_err(|e| DbError::DataIntegrityError(format!("Invalid count {}: {}", count, e)))
}

/// Inserts `new` as a new client and returns it with the identifier assigned by the database.
pub(crate) async fn create_client(ex: &mut Executor, new: &NewClient) -> DbResult<Client> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = format!(
                "INSERT INTO clients (name, email, phone) VALUES ($1, $2, $3) RETURNING {}",
                CLIENT_COLUMNS
            );
            let row = sqlx::query(&query_str)
                .bind(new.name().as_deref())
                .bind(new.email().as_str())
                .bind(new.phone().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            pg_row_to_client(row)
        }

        Executor::Sqlite(ex) => {
            let query_str = format!(
                "INSERT INTO clients (name, email, phone) VALUES (?, ?, ?) RETURNING {}",
                CLIENT_COLUMNS
            );
            let row = sqlx::query(&query_str)
                .bind(new.name().as_deref())
                .bind(new.email().as_str())
                .bind(new.phone().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            sqlite_row_to_client(row)
        }
    }
}

/// Gets all clients, sorted by identifier.
pub(crate) async fn get_clients(ex: &mut Executor) -> DbResult<Vec<Client>> {
    let query_str = format!("SELECT {} FROM clients ORDER BY id", CLIENT_COLUMNS);

    let mut clients = vec![];
    match ex {
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query(&query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                clients.push(pg_row_to_client(row)?);
            }
        }

        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query(&query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                clients.push(sqlite_row_to_client(row)?);
            }
        }
    }
    Ok(clients)
}

/// Gets the client identified by `id`, if it exists.
pub(crate) async fn get_client(ex: &mut Executor, id: ClientId) -> DbResult<Option<Client>> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = format!("SELECT {} FROM clients WHERE id = $1", CLIENT_COLUMNS);
            let maybe_row = sqlx::query(&query_str)
                .bind(id.as_i64())
                .fetch_optional(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            maybe_row.map(pg_row_to_client).transpose()
        }

        Executor::Sqlite(ex) => {
            let query_str = format!("SELECT {} FROM clients WHERE id = ?", CLIENT_COLUMNS);
            let maybe_row = sqlx::query(&query_str)
                .bind(id.as_i64())
                .fetch_optional(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            maybe_row.map(sqlite_row_to_client).transpose()
        }
    }
}

/// Gets all clients whose name contains `text`, sorted by identifier.  The match is
/// case-sensitive.
pub(crate) async fn find_clients_by_name(ex: &mut Executor, text: &str) -> DbResult<Vec<Client>> {
    let mut clients = vec![];
    match ex {
        Executor::Postgres(ex) => {
            let query_str = format!(
                "SELECT {} FROM clients WHERE strpos(name, $1) > 0 ORDER BY id",
                CLIENT_COLUMNS
            );
            let mut rows = sqlx::query(&query_str).bind(text).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                clients.push(pg_row_to_client(row)?);
            }
        }

        Executor::Sqlite(ex) => {
            // Not using LIKE because it is case-insensitive for ASCII and treats % and _ as
            // wildcards.
            let query_str = format!(
                "SELECT {} FROM clients WHERE instr(name, ?) > 0 ORDER BY id",
                CLIENT_COLUMNS
            );
            let mut rows = sqlx::query(&query_str).bind(text).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                clients.push(sqlite_row_to_client(row)?);
            }
        }
    }
    Ok(clients)
}

/// Counts all clients.
pub(crate) async fn count_clients(ex: &mut Executor) -> DbResult<u64> {
    let query_str = "SELECT COUNT(*) AS count FROM clients";
    let count: i64 = match ex {
        Executor::Postgres(ex) => {
            let row = sqlx::query(query_str)
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("count").map_err(postgres::map_sqlx_error)?
        }

        Executor::Sqlite(ex) => {
            let row =
                sqlx::query(query_str).fetch_one(&mut **ex).await.map_err(sqlite::map_sqlx_error)?;
            row.try_get("count").map_err(sqlite::map_sqlx_error)?
        }
    };
    to_count(count)
}

/// Modifies the client identified by `id` by replacing the values present in `fields`, leaving
/// the others untouched.  Returns the updated client or `None` if it does not exist.
pub(crate) async fn update_client(
    ex: &mut Executor,
    id: ClientId,
    fields: &ClientFields,
) -> DbResult<Option<Client>> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = format!(
                "
                UPDATE clients
                SET name = COALESCE($1, name), email = COALESCE($2, email),
                    phone = COALESCE($3, phone)
                WHERE id = $4
                RETURNING {}
                ",
                CLIENT_COLUMNS
            );
            let maybe_row = sqlx::query(&query_str)
                .bind(fields.name.as_deref())
                .bind(fields.email.as_deref())
                .bind(fields.phone.as_deref())
                .bind(id.as_i64())
                .fetch_optional(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            maybe_row.map(pg_row_to_client).transpose()
        }

        Executor::Sqlite(ex) => {
            let query_str = format!(
                "
                UPDATE clients
                SET name = COALESCE(?, name), email = COALESCE(?, email),
                    phone = COALESCE(?, phone)
                WHERE id = ?
                RETURNING {}
                ",
                CLIENT_COLUMNS
            );
            let maybe_row = sqlx::query(&query_str)
                .bind(fields.name.as_deref())
                .bind(fields.email.as_deref())
                .bind(fields.phone.as_deref())
                .bind(id.as_i64())
                .fetch_optional(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            maybe_row.map(sqlite_row_to_client).transpose()
        }
    }
}

/// Deletes the client identified by `id`.  Fails with `DbError::NotFound` if it does not exist.
pub(crate) async fn delete_client(ex: &mut Executor, id: ClientId) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        Executor::Sqlite(ex) => sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id.as_i64())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),
    };
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Deletion of {} affected {} rows", id, n))),
    }
}


#[cfg(test)]
mod postgres_tests {
    use crate::db::tests::generate_db_tests;

    generate_db_tests!(
        {
            let db = std::sync::Arc::new(clientes_core::db::postgres::testutils::setup().await);
            crate::db::init_schema(&mut clientes_core::db::Db::ex(&*db).await.unwrap())
                .await
                .unwrap();
            db
        },
        #[ignore = "Requires environment configuration and is expensive"]
    );
}
