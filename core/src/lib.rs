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

//! Core primitives shared by the sigv4auth signers.
//!
//! This crate carries the pieces every signing pipeline stage needs but none
//! of them owns:
//!
//! - [`Error`] and [`ErrorKind`]: the error type returned by all operations.
//! - [`hash`]: SHA-256, HMAC-SHA256 and lowercase hex helpers.
//! - [`time`]: the UTC instant type plus the two AWS wire formats.
//! - [`utils`]: redaction helpers for printing secrets in `Debug` output.
//!
//! ## Example
//!
//! ```
//! use sigv4auth_core::hash::hex_sha256;
//! use sigv4auth_core::time::{format_date, format_iso8601, parse_iso8601};
//!
//! # fn main() -> sigv4auth_core::Result<()> {
//! let now = parse_iso8601("20240115T103045Z")?;
//! assert_eq!(format_iso8601(now), "20240115T103045Z");
//! assert_eq!(format_date(now), "20240115");
//!
//! assert_eq!(
//!     hex_sha256(b""),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
