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
//! Transactions with known canonical bytes, signatures and ids, all at timestamp 30000000

use super::{Transaction, TransactionAsset, VendorField, Vote};
use crate::{address::Address, crypto::KeyPair};

pub const PASSPHRASE: &str = "this is a top secret passphrase";
pub const SECOND_PASSPHRASE: &str = "second passphrase";
pub const SENDER: &str = "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192";
pub const SECOND_KEY: &str = "02877e4f35c76abaeb152b128670db0a7ae10b3999afcd28a42938b653fbf87ae9";
pub const RECIPIENT: &str = "AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM25";
pub const VENDOR_FIELD: &str = "This is first transaction from JAVA";
pub const TIMESTAMP: u32 = 30_000_000;

pub const TRANSFER_SIGNATURE: &str = "304402206c1871d423b2350ed032590107b02925eedcf4f47ecd081ec19ebf\
    d075609b7f0220371b4e864284998a2bfe953e14db4ef4bbbda05888a6532f230ef9db294af5c8";
pub const TRANSFER_ID: &str = "6054939d57663869f1ffaddd80d3af99cc7d313c01e5bc90c1e3fa43a2ad0386";

pub const DUAL_SIGNATURE: &str = "3045022100c33098220265a23755d6ef4364c8131657656caf20d7d9985f952f\
    6dfde4e348022002ecc238e3c6f47d98ded3cc23d9f28db18be4b4de5dd3d22fbeb5b1375e125d";
pub const DUAL_SIGN_SIGNATURE: &str = "30440220046bc1b7ef23045922b60e48f59847075c47adce15e4037641d1\
    ea62036b646402207c16db5db21827320cd29ba08eeb0f48f999fa4879aae03ad7f577c96e7cf2d2";
pub const DUAL_ID: &str = "6e04a4542af967bc6acec42c34901844ec58657bb7fc21814490b2948e906254";

pub const VOTE_SIGNATURE: &str = "304402202d2f0197280062af7c8a1f364edb00b98ac43660bdebddefbe845b49\
    6a45341e022034b3da3755d4abe3e4a40521f95fb1aca8332d13ddd429ee548fd9eeaece4bd0";
pub const VOTE_ID: &str = "f92a5c637e09ce4fdf31eeb2a642a858bd5bb946f04200ec1878acab537885c7";

pub const DELEGATE_SIGNATURE: &str = "30440220525454bbf03ba00c51a65d2e7ed42edf7b977ee6c5385762cf05\
    9e41dee2d5180220610aa5c1dfe6327d1342a12a8a3029f1f39437bf605a64fe6dd2796b18e416d7";
pub const DELEGATE_ID: &str = "85988265d1b50a54dc64389409f6ade7717c6f5ae6cd7e76731bd8d775044802";

pub const SECOND_SIGNATURE_SIGNATURE: &str = "3045022100ffcd50af82ef199be0d0a1d9a91fae367c3f3e8c9\
    4285b2c329f90416991e5950220109961237794d87b69c944d7c352904b5721a0c16b111a3463a46a1c7555e243";
pub const SECOND_SIGNATURE_ID: &str =
    "e992e09b3a08746bb46643711839c3d510484c652403db34bddf1dc3e9d1df7d";

fn unsigned(asset: TransactionAsset, amount: u64, fee: u64) -> Transaction {
    Transaction {
        asset,
        amount,
        fee,
        timestamp: TIMESTAMP,
        sender_public_key: SENDER.parse().unwrap(),
        vendor_field: None,
        signature: None,
        sign_signature: None,
    }
}

fn signature(value: &str) -> Option<Vec<u8>> {
    Some(hex::decode(value).unwrap())
}

pub fn unsigned_transfer() -> Transaction {
    let recipient = RECIPIENT.parse::<Address>().unwrap();
    let mut tx = unsigned(TransactionAsset::Transfer { recipient }, 133_380_000_000, 10_000_000);
    tx.vendor_field = Some(VendorField::new(VENDOR_FIELD).unwrap());
    tx
}

pub fn transfer() -> Transaction {
    let mut tx = unsigned_transfer();
    tx.signature = signature(TRANSFER_SIGNATURE);
    tx
}

/// Transfer without vendor field, signed with both passphrases
pub fn dual_signed_transfer() -> Transaction {
    let recipient = RECIPIENT.parse::<Address>().unwrap();
    let mut tx = unsigned(TransactionAsset::Transfer { recipient }, 133_380_000_000, 10_000_000);
    tx.signature = signature(DUAL_SIGNATURE);
    tx.sign_signature = signature(DUAL_SIGN_SIGNATURE);
    tx
}

pub fn vote() -> Transaction {
    let votes = vec![format!("+{}", SENDER).parse::<Vote>().unwrap()];
    let mut tx = unsigned(TransactionAsset::Vote { votes }, 0, 100_000_000);
    tx.signature = signature(VOTE_SIGNATURE);
    tx
}

pub fn delegate() -> Transaction {
    let username = "polopolo".to_string();
    let mut tx = unsigned(TransactionAsset::DelegateRegistration { username }, 0, 2_500_000_000);
    tx.signature = signature(DELEGATE_SIGNATURE);
    tx
}

pub fn second_signature() -> Transaction {
    let public_key = KeyPair::from_passphrase(SECOND_PASSPHRASE).public;
    let mut tx = unsigned(TransactionAsset::SecondSignature { public_key }, 0, 500_000_000);
    tx.signature = signature(SECOND_SIGNATURE_SIGNATURE);
    tx
}
