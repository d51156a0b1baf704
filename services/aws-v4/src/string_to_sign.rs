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

use crate::constants::{ALGORITHM, AWS4_REQUEST};
use sigv4auth_core::hash::hex_sha256;
use sigv4auth_core::time::{format_date, format_iso8601, DateTime};
use sigv4auth_core::Result;
use std::fmt::{self, Display, Formatter, Write};

/// The signing instant in both of its wire forms.
///
/// Built from a single [`DateTime`], so the `x-amz-date` value and the
/// scope date can never disagree, even across a UTC midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    iso8601: String,
    date: String,
}

impl Timestamp {
    /// Render the given instant.
    pub fn new(time: DateTime) -> Self {
        Self {
            iso8601: format_iso8601(time),
            date: format_date(time),
        }
    }

    /// Full timestamp: `20240115T103045Z`.
    pub fn iso8601(&self) -> &str {
        &self.iso8601
    }

    /// Date only: `20240115`.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Credential scope: `20240115/<region>/<service>/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Create a scope for the date of `timestamp`.
    pub fn new(timestamp: &Timestamp, region: &str, service: &str) -> Self {
        Self {
            date: timestamp.date().to_string(),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Date part of the scope.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region part of the scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service part of the scope.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for CredentialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date, self.region, self.service
        )
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    timestamp: &Timestamp,
    scope: &CredentialScope,
    canonical_request: &str,
) -> Result<String> {
    let mut f = String::with_capacity(128);
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{}", timestamp.iso8601())?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(canonical_request.as_bytes()))?;

    Ok(f)
}
