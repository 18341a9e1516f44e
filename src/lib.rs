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
//! # ARK v1 transaction crypto
//!
//! Keys derived from passphrases, network addresses, the canonical transaction
//! encoding, ECDSA signatures (including the optional second signature) and the
//! JSON representation used by ARK nodes.
//!
//! ```
//! use ark_crypto::{create_transfer, MAINNET};
//!
//! let tx = create_transfer(
//!     "AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM25",
//!     100_000_000,
//!     Some("hello"),
//!     "this is a top secret passphrase",
//!     None,
//!     &MAINNET,
//! ).unwrap();
//! assert!(tx.verify());
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate enum_display_derive;

pub mod address;
pub mod convert;
pub mod crypto;
pub mod error;
pub mod network;
pub mod transaction;
pub mod util;

pub use self::address::Address;
pub use self::crypto::{sign, verify, KeyPair, PrivateKey, PublicKey};
pub use self::error::CryptoError;
pub use self::network::{Network, NetworkParams, DEVNET, MAINNET};
pub use self::transaction::{
    create_delegate, create_second_signature, create_transfer, create_vote, SignatureState,
    Transaction, TransactionAsset, TransactionBuilder, TransactionType, VendorField, Vote,
    VoteAction,
};
