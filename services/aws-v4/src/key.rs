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

use crate::constants::{AWS4_REQUEST, SECRET_KEY_PREFIX};
use sigv4auth_core::hash::hmac_sha256;
use sigv4auth_core::utils::RedactBytes;
use sigv4auth_core::Result;
use std::fmt::{Debug, Formatter};

/// Key derived from the secret access key, scoped to one date, region and
/// service.
///
/// Lives only for the duration of a signing call. `Debug` never prints the
/// key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Raw key bytes, 32 for HMAC-SHA256.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey")
            .field(&RedactBytes::from(self.0.as_slice()))
            .finish()
    }
}

/// Derive the signing key through the HMAC chain
/// `"AWS4" + secret -> date -> region -> service -> "aws4_request"`.
///
/// An empty secret is processed like any other.
pub fn derive_signing_key(
    secret: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<SigningKey> {
    // Sign secret
    let secret = format!("{SECRET_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes())?;
    // Sign request
    let sign_request = hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())?;

    Ok(SigningKey(sign_request))
}
