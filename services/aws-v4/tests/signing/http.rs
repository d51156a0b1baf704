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

use super::{example_credential, vanilla_time};
use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Request;
use pretty_assertions::assert_eq;
use sigv4auth_aws_v4::{sign_at, sign_http_request, sign_http_request_at, SigningRequest};

#[test]
fn test_http_request_matches_signing_request() -> Result<()> {
    let body = r#"{"Keywords":"kindle"}"#;
    let mut req = Request::builder()
        .method("POST")
        .uri("https://webservices.amazon.com/paapi5/searchitems")
        .header("host", "webservices.amazon.com")
        .header("content-type", "application/json; charset=utf-8")
        .body(body)?;

    sign_http_request_at(
        &mut req,
        &example_credential(),
        "us-east-1",
        "ProductAdvertisingAPI",
        vanilla_time(),
    )?;

    let expected = sign_at(
        &SigningRequest::new(example_credential(), "us-east-1", "ProductAdvertisingAPI")
            .with_method("POST")
            .with_path("/paapi5/searchitems")
            .with_header("host", "webservices.amazon.com")
            .with_header("content-type", "application/json; charset=utf-8")
            .with_payload(body),
        vanilla_time(),
    )?;

    assert_eq!(req.headers()[AUTHORIZATION], expected["Authorization"].as_str());
    assert_eq!(req.headers()["x-amz-date"], expected["x-amz-date"].as_str());
    Ok(())
}

#[test]
fn test_http_request_with_current_time() -> Result<()> {
    let mut req = Request::builder()
        .method("GET")
        .uri("https://example.amazonaws.com/")
        .header("host", "example.amazonaws.com")
        .body(Vec::<u8>::new())?;

    sign_http_request(&mut req, &example_credential(), "us-east-1", "service")?;

    assert_eq!(req.headers().len(), 3);
    assert!(req.headers()[AUTHORIZATION].is_sensitive());
    Ok(())
}
