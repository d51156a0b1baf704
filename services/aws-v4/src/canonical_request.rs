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

use http::header::{HeaderName, HeaderValue};
use sigv4auth_core::hash::hex_sha256;
use sigv4auth_core::{Error, Result};
use std::fmt::Write;

/// Headers normalized for signing: lowercase trimmed names, trimmed values,
/// sorted by name.
///
/// The same sorted list renders both the header block of the canonical
/// request and the `SignedHeaders` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalHeaders {
    entries: Vec<(String, String)>,
}

impl CanonicalHeaders {
    /// Normalize and sort the given headers.
    ///
    /// Returns `InvalidInput` if two names collide after normalization, or a
    /// name or value can not appear in an HTTP header.
    pub fn new<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (name, value) in headers {
            let name = name.as_ref().trim().to_ascii_lowercase();
            let value = value.as_ref().trim();

            HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::invalid_input(format!("invalid header name {name:?}")).with_source(e)
            })?;
            HeaderValue::from_bytes(value.as_bytes()).map_err(|e| {
                Error::invalid_input(format!("invalid value for header {name}")).with_source(e)
            })?;

            entries.push((name, value.to_string()));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::invalid_input(format!(
                "header {} is given more than once",
                pair[0].0
            )));
        }

        Ok(Self { entries })
    }

    /// Iterate over `(name, value)` in signing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no headers at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Semicolon joined header names, e.g. `host;x-amz-date`.
    pub fn signed_headers(&self) -> String {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Build the canonical request.
///
/// ```text
/// GET
/// /
///
/// host:example.amazonaws.com
/// x-amz-date:20150830T123600Z
///
/// host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
///
/// The query line is always empty.
pub fn canonical_request(
    method: &str,
    path: &str,
    headers: &CanonicalHeaders,
    payload: &[u8],
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", method.to_ascii_uppercase())?;
    writeln!(f, "{path}")?;
    // Query
    writeln!(f)?;
    for (name, value) in headers.iter() {
        writeln!(f, "{name}:{value}")?;
    }
    writeln!(f)?;
    writeln!(f, "{}", headers.signed_headers())?;
    write!(f, "{}", hex_sha256(payload))?;

    Ok(f)
}
