// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{AUTHORIZATION, X_AMZ_DATE};
use crate::Credential;
use bytes::Bytes;
use http::Method;
use sigv4auth_core::{Error, Result};
use std::collections::HashMap;

/// Everything needed to sign one request.
///
/// The request is never mutated by signing. [`sign`](crate::sign) returns a
/// new header map holding the original headers plus `x-amz-date` and
/// `Authorization`.
#[derive(Debug, Clone, Default)]
pub struct SigningRequest {
    /// Credential used to derive the signing key.
    pub credential: Credential,
    /// Region of the target endpoint, for example `us-east-1`.
    pub region: String,
    /// Service of the target endpoint, for example `s3`.
    pub service: String,
    /// HTTP method, upper-cased while signing.
    pub method: String,
    /// Request path, used verbatim. Must start with `/`.
    pub path: String,
    /// Request headers. Names are case-insensitive and must stay unique once
    /// lowercased and trimmed.
    pub headers: HashMap<String, String>,
    /// Request body. An absent body is the empty payload.
    pub payload: Bytes,
}

impl SigningRequest {
    /// Create a new signing request for the given credential and scope.
    pub fn new(credential: Credential, region: &str, service: &str) -> Self {
        Self {
            credential,
            region: region.into(),
            service: service.into(),
            ..Default::default()
        }
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add a single header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add all given headers.
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the request body.
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Check the request can be signed.
    ///
    /// The secret access key is allowed to be empty: it is still processed,
    /// and the caller is responsible for supplying a real one.
    pub fn validate(&self) -> Result<()> {
        if self.credential.access_key_id.is_empty() {
            return Err(Error::invalid_input("access key id is required"));
        }
        if self.region.is_empty() {
            return Err(Error::invalid_input("region is required"));
        }
        if self.service.is_empty() {
            return Err(Error::invalid_input("service is required"));
        }
        if self.method.is_empty() {
            return Err(Error::invalid_input("http method is required"));
        }
        Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())?;

        if !self.path.starts_with('/') {
            return Err(Error::invalid_input(format!(
                "path must start with '/', got {:?}",
                self.path
            )));
        }

        for name in self.headers.keys() {
            let normalized = name.trim();
            if normalized.eq_ignore_ascii_case(X_AMZ_DATE)
                || normalized.eq_ignore_ascii_case(AUTHORIZATION)
            {
                return Err(Error::invalid_input(format!(
                    "header {normalized} is added by the signer and must not be supplied"
                )));
            }
        }

        Ok(())
    }
}
