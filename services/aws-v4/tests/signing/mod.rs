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

mod http;
mod vectors;

use chrono::{TimeZone, Utc};
use sigv4auth_aws_v4::{Credential, SigningRequest};
use sigv4auth_core::time::DateTime;

/// Credential used by the AWS SigV4 test suite.
pub fn example_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// Signing time used by the AWS SigV4 test suite: 20150830T123600Z.
pub fn vanilla_time() -> DateTime {
    Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
}

/// `get-vanilla` from the AWS SigV4 test suite.
pub fn vanilla_request(method: &str) -> SigningRequest {
    let _ = env_logger::builder().is_test(true).try_init();

    SigningRequest::new(example_credential(), "us-east-1", "service")
        .with_method(method)
        .with_path("/")
        .with_header("Host", "example.amazonaws.com")
}
