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

//! Known answers published with the AWS SigV4 documentation and test suite.

use super::{example_credential, vanilla_request, vanilla_time};
use anyhow::Result;
use pretty_assertions::assert_eq;
use sigv4auth_aws_v4::{
    canonical_request, derive_signing_key, sign_at, string_to_sign, CanonicalHeaders,
    CredentialScope, Timestamp,
};
use sigv4auth_core::hash::hex_encode;
use test_case::test_case;

#[test]
fn test_signing_key_from_aws_docs() -> Result<()> {
    let key = derive_signing_key(
        &example_credential().secret_access_key,
        "20120215",
        "us-east-1",
        "iam",
    )?;

    assert_eq!(
        hex_encode(key.as_bytes()),
        "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
    );
    Ok(())
}

#[test]
fn test_get_vanilla_stages() -> Result<()> {
    let timestamp = Timestamp::new(vanilla_time());
    let headers = CanonicalHeaders::new([
        ("Host", "example.amazonaws.com"),
        ("X-Amz-Date", timestamp.iso8601()),
    ])?;

    let creq = canonical_request("GET", "/", &headers, b"")?;
    assert_eq!(
        creq,
        "GET\n/\n\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    let scope = CredentialScope::new(&timestamp, "us-east-1", "service");
    let sts = string_to_sign(&timestamp, &scope, &creq)?;
    assert_eq!(
        sts,
        "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\nbb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63"
    );
    Ok(())
}

#[test_case("GET", "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "get_vanilla")]
#[test_case("get", "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "get_vanilla_lowercase_method")]
#[test_case("POST", "5da7c1a2acd57cee7505fc6676e4e544621c30862966e37dddb68e92efbe5d6b"; "post_vanilla")]
fn test_vanilla_signature(method: &str, signature: &str) {
    let headers = sign_at(&vanilla_request(method), vanilla_time()).unwrap();

    assert_eq!(headers["x-amz-date"], "20150830T123600Z");
    assert_eq!(
        headers["Authorization"],
        format!(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature={signature}"
        )
    );
}
