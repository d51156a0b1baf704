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

use crate::canonical_request::{canonical_request, CanonicalHeaders};
use crate::constants::{ALGORITHM, AUTHORIZATION, X_AMZ_DATE};
use crate::key::{derive_signing_key, SigningKey};
use crate::string_to_sign::{string_to_sign, CredentialScope, Timestamp};
use crate::SigningRequest;
use log::debug;
use sigv4auth_core::hash::hex_hmac_sha256;
use sigv4auth_core::time::{now, DateTime};
use sigv4auth_core::Result;
use std::collections::HashMap;
use std::iter;

/// Sign the request with the current time.
///
/// Returns the caller's headers plus `x-amz-date` and `Authorization`.
/// On error nothing is returned and `req` is left as it was.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
pub fn sign(req: &SigningRequest) -> Result<HashMap<String, String>> {
    sign_at(req, now())
}

/// Sign the request as if the clock read `time`.
///
/// For fixed inputs and a fixed `time` the output is always the same.
pub fn sign_at(req: &SigningRequest, time: DateTime) -> Result<HashMap<String, String>> {
    let (x_amz_date, authorization) = signed_values(req, time)?;

    let mut headers = HashMap::with_capacity(req.headers.len() + 2);
    headers.extend(req.headers.iter().map(|(k, v)| (k.clone(), v.clone())));
    headers.insert(X_AMZ_DATE.to_string(), x_amz_date);
    headers.insert(AUTHORIZATION.to_string(), authorization);

    Ok(headers)
}

/// Run the whole pipeline and return the `x-amz-date` and `Authorization`
/// values.
pub(crate) fn signed_values(req: &SigningRequest, time: DateTime) -> Result<(String, String)> {
    req.validate()?;

    let timestamp = Timestamp::new(time);

    let headers = CanonicalHeaders::new(
        req.headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(iter::once((X_AMZ_DATE, timestamp.iso8601()))),
    )?;

    let creq = canonical_request(&req.method, &req.path, &headers, &req.payload)?;
    debug!("calculated canonical request: {creq}");

    // Scope: "20220313/<region>/<service>/aws4_request"
    let scope = CredentialScope::new(&timestamp, &req.region, &req.service);
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(&timestamp, &scope, &creq)?;
    debug!("calculated string to sign: {string_to_sign}");

    let signature = {
        let signing_key = derive_signing_key(
            &req.credential.secret_access_key,
            scope.date(),
            scope.region(),
            scope.service(),
        )?;
        compute_signature(&signing_key, &string_to_sign)?
    };

    let authorization = authorization_value(
        &req.credential.access_key_id,
        &scope,
        &headers.signed_headers(),
        &signature,
    );

    Ok((timestamp.iso8601().to_string(), authorization))
}

/// Lowercase hex HMAC-SHA256 of the string to sign.
pub fn compute_signature(signing_key: &SigningKey, string_to_sign: &str) -> Result<String> {
    hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())
}

/// Assemble the `Authorization` header value.
pub fn authorization_value(
    access_key_id: &str,
    scope: &CredentialScope,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}
