/*
Copyright 2024 The ark-crypto Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Errors raised by key, address and transaction operations
//!
//! Signature verification never produces an error: a forged or tampered
//! transaction is reported as `false` by the `verify` family of functions.

use bitcoin::util::base58;
use std::fmt::Display;

/// Error taxonomy for the crate
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Factory or builder input outside of its domain
    InvalidArgument(String),
    /// Public or private key bytes which don't form a valid secp256k1 key
    InvalidKey,
    /// JSON document can't be decoded into a transaction
    MalformedTransaction(String),
}

impl std::error::Error for CryptoError {}

impl From<secp256k1::Error> for CryptoError {
    fn from(_: secp256k1::Error) -> Self {
        CryptoError::InvalidKey
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::InvalidArgument(format!("invalid hex: {}", err))
    }
}

impl From<base58::Error> for CryptoError {
    fn from(err: base58::Error) -> Self {
        CryptoError::InvalidArgument(format!("invalid base58: {}", err))
    }
}

impl From<serde_json::Error> for CryptoError {
    fn from(err: serde_json::Error) -> Self {
        CryptoError::MalformedTransaction(err.to_string())
    }
}
