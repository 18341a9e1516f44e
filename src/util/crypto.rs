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
//! # Crypto util functions

use bitcoin_hashes::{ripemd160 as ripemd, Hash};
use sha2::{Digest, Sha256};

/// SHA-256 hash length in bytes
pub const SHA256_BYTES: usize = 32;

/// RIPEMD-160 hash length in bytes
pub const RIPEMD160_BYTES: usize = 20;

/// Calculate SHA-256 crypto hash
pub fn sha256(data: &[u8]) -> [u8; SHA256_BYTES] {
    Sha256::digest(data).into()
}

/// Calculate RIPEMD-160 crypto hash
pub fn ripemd160(data: &[u8]) -> [u8; RIPEMD160_BYTES] {
    ripemd::Hash::hash(data).into_inner()
}
