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

//! Configuration of the service, read from the environment.

use clientes_core::db::postgres::{PostgresDb, PostgresOptions};
use clientes_core::db::sqlite;
use clientes_core::db::{Db, DbResult};
use clientes_core::env::get_optional_var;
use std::sync::Arc;

/// Prefix of all variables that configure the service.
const PREFIX: &str = "CLIENTES";

/// Prefix of the variables that configure the PostgreSQL connection.
const PGSQL_PREFIX: &str = "PGSQL_PROD";

/// Port to listen on when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// SQLite database file to use when none is configured.
pub const DEFAULT_SQLITE_PATH: &str = "clientes.db";

/// Database backend configuration.
#[derive(Debug)]
pub enum DbConfig {
    /// Use a SQLite database stored in the given file, which is created if missing.
    Sqlite(String),

    /// Use a PostgreSQL database.
    Postgres(PostgresOptions),
}

impl DbConfig {
    /// Opens the database described by this configuration.
    pub async fn connect(self) -> DbResult<Arc<dyn Db + Send + Sync>> {
        match self {
            DbConfig::Sqlite(path) => {
                let db = sqlite::connect(&format!("sqlite://{}?mode=rwc", path)).await?;
                Ok(Arc::new(db))
            }
            DbConfig::Postgres(opts) => Ok(Arc::new(PostgresDb::connect(opts)?)),
        }
    }
}

/// Service configuration.
#[derive(Debug)]
pub struct Config {
    /// TCP port to listen on, on all interfaces.
    pub port: u16,

    /// Database to use.
    pub db: DbConfig,
}

impl Config {
    /// Creates a new configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let port = get_optional_var::<u16>(PREFIX, "PORT")?.unwrap_or(DEFAULT_PORT);

        let backend = get_optional_var::<String>(PREFIX, "DB")?;
        let db = match backend.as_deref() {
            None | Some("sqlite") => {
                let path = get_optional_var::<String>(PREFIX, "SQLITE_PATH")?
                    .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_owned());
                DbConfig::Sqlite(path)
            }
            Some("postgres") => DbConfig::Postgres(PostgresOptions::from_env(PGSQL_PREFIX)?),
            Some(other) => {
                return Err(format!(
                    "Invalid value '{}' in {}_DB; must be sqlite or postgres",
                    other, PREFIX
                ))
            }
        };

        Ok(Self { port, db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All variables that affect the configuration, unset.
    const CLEAN_ENV: [(&str, Option<&str>); 4] = [
        ("CLIENTES_PORT", None),
        ("CLIENTES_DB", None),
        ("CLIENTES_SQLITE_PATH", None),
        ("PGSQL_PROD_HOST", None),
    ];

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(CLEAN_ENV, || {
            let config = Config::from_env().unwrap();
            assert_eq!(DEFAULT_PORT, config.port);
            match config.db {
                DbConfig::Sqlite(path) => assert_eq!(DEFAULT_SQLITE_PATH, path),
                db => panic!("Unexpected database config {:?}", db),
            }
        });
    }

    #[test]
    fn test_config_sqlite() {
        temp_env::with_vars(CLEAN_ENV, || {
            temp_env::with_vars(
                [
                    ("CLIENTES_PORT", Some("8080")),
                    ("CLIENTES_DB", Some("sqlite")),
                    ("CLIENTES_SQLITE_PATH", Some("/tmp/other.db")),
                ],
                || {
                    let config = Config::from_env().unwrap();
                    assert_eq!(8080, config.port);
                    match config.db {
                        DbConfig::Sqlite(path) => assert_eq!("/tmp/other.db", path),
                        db => panic!("Unexpected database config {:?}", db),
                    }
                },
            );
        });
    }

    #[test]
    fn test_config_postgres() {
        temp_env::with_vars(
            [
                ("CLIENTES_PORT", None),
                ("CLIENTES_DB", Some("postgres")),
                ("PGSQL_PROD_HOST", Some("the-host")),
                ("PGSQL_PROD_PORT", Some("5432")),
                ("PGSQL_PROD_DATABASE", Some("the-database")),
                ("PGSQL_PROD_USERNAME", Some("the-username")),
                ("PGSQL_PROD_PASSWORD", Some("the-password")),
                ("PGSQL_PROD_MIN_CONNECTIONS", None),
                ("PGSQL_PROD_MAX_CONNECTIONS", None),
                ("PGSQL_PROD_MAX_RETRIES", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(DEFAULT_PORT, config.port);
                match config.db {
                    DbConfig::Postgres(opts) => {
                        assert_eq!("the-host", opts.host);
                        assert_eq!(5432, opts.port);
                        assert_eq!("the-database", opts.database);
                        assert_eq!("the-username", opts.username);
                        assert_eq!("the-password", opts.password);
                    }
                    db => panic!("Unexpected database config {:?}", db),
                }
            },
        );
    }

    #[test]
    fn test_config_postgres_incomplete() {
        temp_env::with_vars(CLEAN_ENV, || {
            temp_env::with_var("CLIENTES_DB", Some("postgres"), || {
                let err = Config::from_env().unwrap_err();
                assert!(err.contains("PGSQL_PROD_HOST not present"), "Unexpected error: {}", err);
            });
        });
    }

    #[test]
    fn test_config_bad_backend() {
        temp_env::with_vars(CLEAN_ENV, || {
            temp_env::with_var("CLIENTES_DB", Some("mysql"), || {
                let err = Config::from_env().unwrap_err();
                assert!(err.contains("'mysql'"), "Unexpected error: {}", err);
            });
        });
    }

    #[test]
    fn test_config_bad_port() {
        temp_env::with_vars(CLEAN_ENV, || {
            temp_env::with_var("CLIENTES_PORT", Some("http"), || {
                let err = Config::from_env().unwrap_err();
                assert!(err.contains("CLIENTES_PORT"), "Unexpected error: {}", err);
            });
        });
    }

    #[tokio::test]
    async fn test_connect_sqlite_creates_file() {
        let path = std::env::temp_dir().join(format!("clientes-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let db = DbConfig::Sqlite(path.display().to_string()).connect().await.unwrap();
        crate::db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        db.close().await;

        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
