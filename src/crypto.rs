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
//! # Keys and ECDSA signatures using the SECG curve secp256k1

pub mod keys;
pub mod signature;

pub use self::keys::{KeyPair, PrivateKey, PublicKey, PRIVATE_KEY_BYTES, PUBLIC_KEY_BYTES};
pub use self::signature::{sign, verify};

use secp256k1::{All, Secp256k1};

lazy_static! {
    /// Curve context shared by signing and verification
    pub static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}
