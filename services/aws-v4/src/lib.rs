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

//! AWS SigV4 header signing.
//!
//! Computes the `x-amz-date` and `Authorization` headers for one request
//! from a [`Credential`], the target region and service, and the request
//! method, path, headers and payload.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`canonical_request`] from method, path, [`CanonicalHeaders`] and payload.
//! 2. [`string_to_sign`] from the [`Timestamp`], [`CredentialScope`] and canonical request.
//! 3. [`derive_signing_key`] through the HMAC chain rooted at the secret key.
//! 4. [`compute_signature`] and [`authorization_value`].
//!
//! ## Example
//!
//! ```
//! use sigv4auth_aws_v4::{sign, Credential, SigningRequest};
//!
//! # fn main() -> sigv4auth_core::Result<()> {
//! let req = SigningRequest::new(
//!     Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"),
//!     "us-east-1",
//!     "execute-api",
//! )
//! .with_method("POST")
//! .with_path("/paapi5/searchitems")
//! .with_header("host", "webservices.amazon.com")
//! .with_header("content-type", "application/json; charset=utf-8")
//! .with_payload(r#"{"Keywords":"rust"}"#);
//!
//! let headers = sign(&req)?;
//! assert_eq!(headers.len(), 4);
//! assert!(headers["Authorization"].starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{ALGORITHM, AUTHORIZATION, AWS4_REQUEST, X_AMZ_DATE};

mod credential;
pub use credential::Credential;

mod request;
pub use request::SigningRequest;

mod canonical_request;
pub use canonical_request::{canonical_request, CanonicalHeaders};

mod string_to_sign;
pub use string_to_sign::{string_to_sign, CredentialScope, Timestamp};

mod key;
pub use key::{derive_signing_key, SigningKey};

mod sign_request;
pub use sign_request::{authorization_value, compute_signature, sign, sign_at};

mod http_request;
pub use http_request::{sign_http_request, sign_http_request_at};
