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
//! # Hash-then-sign ECDSA
//!
//! Data is hashed with SHA-256 and the digest is signed with a deterministic (RFC 6979),
//! low-S ECDSA signature, DER encoded.

use super::{PrivateKey, PublicKey, SECP256K1};
use crate::util::sha256;
use secp256k1::{ecdsa::Signature, Message};

/// Calculate hash for data (SHA-256) and sign it with provided private key
pub fn sign(data: &[u8], pk: &PrivateKey) -> Vec<u8> {
    let msg = Message::from_slice(&sha256(data)).expect("Expect valid hash message");
    SECP256K1.sign_ecdsa(&msg, pk.as_secret()).serialize_der().to_vec()
}

/// Check a DER signature of the SHA-256 hash of data.
///
/// Never fails: a malformed signature is reported as `false`. High-S signatures are accepted.
pub fn verify(data: &[u8], signature: &[u8], public_key: &PublicKey) -> bool {
    let mut sig = match Signature::from_der(signature) {
        Ok(sig) => sig,
        Err(e) => {
            trace!("Not a DER signature: {:?}", e);
            return false;
        }
    };
    sig.normalize_s();
    let msg = Message::from_slice(&sha256(data)).expect("Expect valid hash message");
    SECP256K1.verify_ecdsa(&msg, &sig, public_key.as_secp()).is_ok()
}
