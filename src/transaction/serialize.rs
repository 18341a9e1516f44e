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
//! # Canonical transaction bytes
//!
//! Layout, all integers little-endian:
//!
//! | field             | size                                            |
//! |-------------------|-------------------------------------------------|
//! | type              | 1                                               |
//! | timestamp         | 4                                               |
//! | sender public key | 33                                              |
//! | recipient         | 21, zeroes when absent                          |
//! | vendor field      | 64, zero padded, zeroes when absent             |
//! | amount            | 8                                               |
//! | fee               | 8                                               |
//! | asset             | depends on type                                 |
//! | signature         | DER, only when requested and present            |
//! | second signature  | DER, only when requested and present            |

use super::{Transaction, TransactionAsset, VENDOR_FIELD_BYTES};
use crate::address::ADDRESS_BYTES;
use byteorder::{LittleEndian, WriteBytesExt};
use itertools::Itertools;

impl Transaction {
    /// Canonical bytes of the transaction, with signatures appended on request.
    ///
    /// Prefer one of `bytes_for_signing`, `bytes_for_second_signing` or `bytes_for_id`,
    /// which name the three layouts used by the protocol.
    pub fn to_signing_bytes(&self, include_signature: bool, include_second_signature: bool) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);

        buf.push(self.transaction_type() as u8);
        buf.write_u32::<LittleEndian>(self.timestamp)
            .expect("Failed to write timestamp");
        buf.extend_from_slice(&self.sender_public_key.serialize());

        match self.recipient() {
            Some(recipient) => buf.extend_from_slice(&recipient.to_bytes()),
            None => buf.extend_from_slice(&[0u8; ADDRESS_BYTES]),
        }

        let mut vendor_field = [0u8; VENDOR_FIELD_BYTES];
        if let Some(value) = &self.vendor_field {
            let value = value.as_str().as_bytes();
            vendor_field[..value.len()].copy_from_slice(value);
        }
        buf.extend_from_slice(&vendor_field);

        buf.write_u64::<LittleEndian>(self.amount)
            .expect("Failed to write amount");
        buf.write_u64::<LittleEndian>(self.fee)
            .expect("Failed to write fee");

        self.write_asset(&mut buf);

        if include_signature {
            if let Some(signature) = &self.signature {
                buf.extend_from_slice(signature);
            }
        }
        if include_second_signature {
            if let Some(sign_signature) = &self.sign_signature {
                buf.extend_from_slice(sign_signature);
            }
        }
        buf
    }

    /// Bytes covered by the sender signature, no signatures included
    pub fn bytes_for_signing(&self) -> Vec<u8> {
        self.to_signing_bytes(false, false)
    }

    /// Bytes covered by the second signature, sender signature included
    pub fn bytes_for_second_signing(&self) -> Vec<u8> {
        self.to_signing_bytes(true, false)
    }

    /// Bytes hashed into the transaction id, both signatures included
    pub fn bytes_for_id(&self) -> Vec<u8> {
        self.to_signing_bytes(true, true)
    }

    fn write_asset(&self, buf: &mut Vec<u8>) {
        match &self.asset {
            TransactionAsset::Transfer { .. } => {}
            TransactionAsset::SecondSignature { public_key } => {
                buf.extend_from_slice(&public_key.serialize())
            }
            TransactionAsset::DelegateRegistration { username } => {
                buf.extend_from_slice(username.as_bytes())
            }
            TransactionAsset::Vote { votes } => {
                buf.extend_from_slice(votes.iter().join("").as_bytes())
            }
        }
    }
}
