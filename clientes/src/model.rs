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

//! High-level data types.

use clientes_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Identifier of a client.  Assigned by the database on creation and never reused.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ClientId(i64);

impl ClientId {
    /// Creates a new identifier from its raw database representation.
    pub(crate) fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the identifier as stored in the database.
    pub(crate) fn as_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for ClientId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(ModelError(format!("ID de cliente inválido: '{}'", s))),
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client as stored in the database.
#[derive(Constructor, Getters, Serialize, ToSchema)]
#[cfg_attr(test, derive(Clone, Debug, Deserialize, PartialEq))]
pub(crate) struct Client {
    /// Identifier assigned by the database.
    #[schema(value_type = i64, example = 1)]
    id: ClientId,

    /// Name of the client.
    #[schema(example = "Pablo")]
    name: Option<String>,

    /// Contact email.  Always present for clients created through the API.
    #[schema(example = "pablo@email.com")]
    email: Option<String>,

    /// Contact phone number.
    #[schema(example = "11999999999")]
    phone: Option<String>,
}

/// Fields of a client as provided by callers to create or update one.
///
/// All fields are optional at this level: on creation the business layer requires `email`, and on
/// update only the present fields are modified.
#[derive(Default, Deserialize, ToSchema)]
#[cfg_attr(test, derive(Clone, Debug, PartialEq, Serialize))]
pub(crate) struct ClientFields {
    /// New name of the client.
    #[schema(example = "Novo Cliente")]
    pub(crate) name: Option<String>,

    /// New contact email.
    #[schema(example = "novo@email.com")]
    pub(crate) email: Option<String>,

    /// New contact phone number.
    #[schema(example = "11999999999")]
    pub(crate) phone: Option<String>,
}

/// A client that has not been stored yet and that satisfies the creation rules.
#[derive(Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct NewClient {
    /// Name of the client.
    name: Option<String>,

    /// Contact email.
    email: String,

    /// Contact phone number.
    phone: Option<String>,
}
