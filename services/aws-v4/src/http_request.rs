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

use crate::constants::X_AMZ_DATE;
use crate::sign_request::signed_values;
use crate::{Credential, SigningRequest};
use bytes::Bytes;
use http::header;
use http::HeaderValue;
use http::Request;
use sigv4auth_core::time::{now, DateTime};
use sigv4auth_core::{Error, Result};
use std::collections::HashMap;

/// Sign an [`http::Request`] in place with the current time.
///
/// Only `x-amz-date` and `authorization` are added. Callers supply `host`
/// and any other header they want covered by the signature. If signing
/// fails, the request is returned to the caller untouched.
pub fn sign_http_request<B: AsRef<[u8]>>(
    req: &mut Request<B>,
    credential: &Credential,
    region: &str,
    service: &str,
) -> Result<()> {
    sign_http_request_at(req, credential, region, service, now())
}

/// Sign an [`http::Request`] in place as if the clock read `time`.
pub fn sign_http_request_at<B: AsRef<[u8]>>(
    req: &mut Request<B>,
    credential: &Credential,
    region: &str,
    service: &str,
    time: DateTime,
) -> Result<()> {
    if req.uri().query().is_some() {
        return Err(Error::invalid_input(
            "query string is not supported by header based signing",
        ));
    }

    let mut headers = HashMap::with_capacity(req.headers().keys_len());
    for name in req.headers().keys() {
        let mut values = req.headers().get_all(name).iter();
        let Some(value) = values.next() else {
            continue;
        };
        if values.next().is_some() {
            return Err(Error::invalid_input(format!(
                "header {name} is given more than once"
            )));
        }
        headers.insert(name.as_str().to_string(), value.to_str()?.to_string());
    }

    let signing_req = SigningRequest {
        credential: credential.clone(),
        region: region.to_string(),
        service: service.to_string(),
        method: req.method().as_str().to_string(),
        path: req.uri().path().to_string(),
        headers,
        payload: Bytes::copy_from_slice(req.body().as_ref()),
    };
    let (x_amz_date, authorization) = signed_values(&signing_req, time)?;

    let x_amz_date = HeaderValue::try_from(x_amz_date)?;
    let mut authorization = HeaderValue::try_from(authorization)?;
    // Set authorization sensitive to avoid leaking.
    authorization.set_sensitive(true);

    // Apply to the request.
    let headers = req.headers_mut();
    headers.insert(X_AMZ_DATE, x_amz_date);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(())
}
