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
//! # Transaction signatures and id
//!
//! A transaction goes through `Unsigned -> PrimarySigned -> DualSigned`. The sender
//! signature covers `bytes_for_signing`, the second signature covers
//! `bytes_for_second_signing` and the id is the hash of `bytes_for_id`.

use super::Transaction;
use crate::{
    crypto::{sign, verify, KeyPair, PrivateKey, PublicKey},
    error::CryptoError,
    util::sha256,
};

/// Which signatures a transaction carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureState {
    /// No signature
    Unsigned,
    /// Signed by the sender only
    PrimarySigned,
    /// Signed by the sender and the second key
    DualSigned,
}

impl Transaction {
    /// Sign by the sender. Sets the sender public key and drops any second signature,
    /// which wouldn't cover the new primary signature.
    pub fn sign(&mut self, keys: &KeyPair) {
        self.sender_public_key = keys.public;
        self.sign_signature = None;
        self.signature = Some(sign(&self.bytes_for_signing(), &keys.private));
        debug!("Signed transaction {:?} by {}", self.transaction_type(), self.sender_public_key);
    }

    /// Add the second signature; the transaction must already be signed by the sender
    pub fn second_sign(&mut self, second: &PrivateKey) -> Result<(), CryptoError> {
        if self.signature.is_none() {
            return Err(CryptoError::InvalidArgument(
                "second signature requires the sender signature".to_string(),
            ));
        }
        self.sign_signature = Some(sign(&self.bytes_for_second_signing(), second));
        debug!("Second signed transaction {:?}", self.transaction_type());
        Ok(())
    }

    /// Check the sender signature. An unsigned transaction doesn't verify.
    pub fn verify(&self) -> bool {
        match &self.signature {
            Some(signature) => {
                let valid = verify(&self.bytes_for_signing(), signature, &self.sender_public_key);
                if !valid {
                    trace!("Invalid signature for {}", self.sender_public_key);
                }
                valid
            }
            None => false,
        }
    }

    /// Check the second signature against the registered second public key
    pub fn second_verify(&self, second_public_key: &PublicKey) -> bool {
        match &self.sign_signature {
            Some(sign_signature) => {
                let valid = verify(&self.bytes_for_second_signing(), sign_signature, second_public_key);
                if !valid {
                    trace!("Invalid second signature for {}", second_public_key);
                }
                valid
            }
            None => false,
        }
    }

    /// Which signatures are present
    pub fn signature_state(&self) -> SignatureState {
        match (&self.signature, &self.sign_signature) {
            (None, _) => SignatureState::Unsigned,
            (Some(_), None) => SignatureState::PrimarySigned,
            (Some(_), Some(_)) => SignatureState::DualSigned,
        }
    }

    /// Hex SHA-256 of the fully signed bytes, `None` until the transaction is signed
    pub fn id(&self) -> Option<String> {
        self.signature
            .as_ref()
            .map(|_| hex::encode(sha256(&self.bytes_for_id())))
    }
}
