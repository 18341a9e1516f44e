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
//! # Passphrase derived key pairs
//!
//! A passphrase is hashed with SHA-256 and the digest, reduced modulo the curve order, is
//! used as the private scalar. Public keys are always handled in compressed (33 bytes) form.

use super::SECP256K1;
use crate::{error::CryptoError, network::NetworkParams, util::sha256};
use bitcoin::util::base58;
use num_bigint::BigUint;
use secp256k1::{constants::CURVE_ORDER, PublicKey as SecpPublicKey, SecretKey};
use std::{fmt, str::FromStr};

/// Private key length in bytes
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Compressed public key length in bytes
pub const PUBLIC_KEY_BYTES: usize = 33;

/// Suffix of a WIF payload for keys with a compressed public key
const WIF_COMPRESSED: u8 = 0x01;

/// Private key used as x in an ECDSA signature
#[derive(Clone, Copy)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Derive a private key from a passphrase. Any string, including an empty one, is accepted.
    pub fn from_passphrase(passphrase: &str) -> Self {
        PrivateKey(scalar_from_digest(sha256(passphrase.as_bytes())))
    }

    /// Try to convert a byte slice into `PrivateKey`.
    ///
    /// # Arguments
    ///
    /// * `data` - A byte slice with `PRIVATE_KEY_BYTES` length, holding a non-zero scalar
    ///   below the curve order
    pub fn from_slice(data: &[u8]) -> Result<Self, CryptoError> {
        if data.len() != PRIVATE_KEY_BYTES {
            return Err(CryptoError::InvalidKey);
        }
        Ok(PrivateKey(SecretKey::from_slice(data)?))
    }

    /// Import a key in Wallet Import Format, checking its version byte against the network
    pub fn from_wif(wif: &str, params: &NetworkParams) -> Result<Self, CryptoError> {
        let data = base58::from_check(wif).map_err(|_| CryptoError::InvalidKey)?;
        if data.len() != PRIVATE_KEY_BYTES + 2
            || data[0] != params.wif
            || data[PRIVATE_KEY_BYTES + 1] != WIF_COMPRESSED
        {
            return Err(CryptoError::InvalidKey);
        }
        PrivateKey::from_slice(&data[1..=PRIVATE_KEY_BYTES])
    }

    /// Export the key in Wallet Import Format, flagged as compressed
    pub fn to_wif(&self, params: &NetworkParams) -> String {
        let mut buf = Vec::with_capacity(PRIVATE_KEY_BYTES + 2);
        buf.push(params.wif);
        buf.extend_from_slice(&self.to_bytes());
        buf.push(WIF_COMPRESSED);
        base58::check_encode_slice(&buf)
    }

    /// Big-endian scalar
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES] {
        self.0.secret_bytes()
    }

    /// Public key matching this private key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(SecpPublicKey::from_secret_key(&SECP256K1, &self.0))
    }

    pub(crate) fn as_secret(&self) -> &SecretKey {
        &self.0
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PrivateKey(***)")
    }
}

// A digest which is a multiple of the group order has no known preimage
fn scalar_from_digest(digest: [u8; PRIVATE_KEY_BYTES]) -> SecretKey {
    SecretKey::from_slice(&digest).unwrap_or_else(|_| {
        let reduced = BigUint::from_bytes_be(&digest) % BigUint::from_bytes_be(&CURVE_ORDER);
        let bytes = reduced.to_bytes_be();
        let mut scalar = [0u8; PRIVATE_KEY_BYTES];
        scalar[PRIVATE_KEY_BYTES - bytes.len()..].copy_from_slice(&bytes);
        SecretKey::from_slice(&scalar).expect("Expect non-zero scalar after reduction")
    })
}

/// Compressed secp256k1 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey(SecpPublicKey);

impl PublicKey {
    /// Parse a compressed (33 bytes) SEC1 encoded public key
    pub fn from_slice(data: &[u8]) -> Result<Self, CryptoError> {
        if data.len() != PUBLIC_KEY_BYTES {
            return Err(CryptoError::InvalidKey);
        }
        Ok(PublicKey(SecpPublicKey::from_slice(data)?))
    }

    /// Parse a hex encoded compressed public key
    pub fn from_hex(value: &str) -> Result<Self, CryptoError> {
        let data = hex::decode(value).map_err(|_| CryptoError::InvalidKey)?;
        PublicKey::from_slice(&data)
    }

    /// Compressed SEC1 encoding
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_BYTES] {
        self.0.serialize()
    }

    /// Lowercase hex of the compressed encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    pub(crate) fn as_secp(&self) -> &SecpPublicKey {
        &self.0
    }
}

impl From<SecpPublicKey> for PublicKey {
    fn from(value: SecpPublicKey) -> Self {
        PublicKey(value)
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PublicKey::from_hex(s)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Private key with its public counterpart
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    /// Secret scalar
    pub private: PrivateKey,
    /// Matching public key
    pub public: PublicKey,
}

impl KeyPair {
    /// Deterministically derive a key pair from a passphrase
    ///
    /// # Example
    ///
    /// ```
    /// let keys = ark_crypto::KeyPair::from_passphrase("this is a top secret passphrase");
    /// assert_eq!(keys.public.to_string(),
    ///            "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192");
    /// ```
    pub fn from_passphrase(passphrase: &str) -> Self {
        KeyPair::from(PrivateKey::from_passphrase(passphrase))
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        KeyPair {
            public: private.public_key(),
            private,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DEVNET, MAINNET};
    use crate::util::tests::*;

    #[test]
    fn should_derive_private_key_from_passphrase() {
        let pk = PrivateKey::from_passphrase("this is a top secret passphrase");
        assert_eq!(
            pk.to_bytes(),
            to_32bytes("d8839c2432bfd0a67ef10a804ba991eabba19f154a3d707917681d45822a5712")
        );
    }

    #[test]
    fn should_derive_compressed_public_key() {
        let keys = KeyPair::from_passphrase("second passphrase");
        assert_eq!(
            keys.public.to_hex(),
            "02877e4f35c76abaeb152b128670db0a7ae10b3999afcd28a42938b653fbf87ae9"
        );
    }

    #[test]
    fn should_derive_from_empty_passphrase() {
        let keys = KeyPair::from_passphrase("");
        assert_eq!(
            keys.private.to_bytes(),
            to_32bytes("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            keys.public.to_hex(),
            "03a34b99f22c790c4e36b2b3c2c35a36db06226e41c692fc82b8b56ac1c540c5bd"
        );
    }

    #[test]
    fn should_be_deterministic() {
        assert_eq!(
            KeyPair::from_passphrase("first passphrase"),
            KeyPair::from_passphrase("first passphrase")
        );
        assert_ne!(
            KeyPair::from_passphrase("first passphrase"),
            KeyPair::from_passphrase("first passphrase ")
        );
    }

    #[test]
    fn should_reduce_digest_above_curve_order() {
        let scalar = scalar_from_digest([0xff; 32]);
        assert_eq!(
            scalar.secret_bytes(),
            to_32bytes("000000000000000000000000000000014551231950b75fc4402da1732fc9bebe")
        );
    }

    #[test]
    fn should_reduce_digest_equal_to_order_plus_five() {
        let mut digest = CURVE_ORDER;
        digest[31] += 5;
        let mut expected = [0u8; 32];
        expected[31] = 5;
        assert_eq!(scalar_from_digest(digest).secret_bytes(), expected);
    }

    #[test]
    fn should_reject_invalid_private_key() {
        assert_eq!(PrivateKey::from_slice(&[0u8; 32]), Err(CryptoError::InvalidKey));
        assert_eq!(PrivateKey::from_slice(&[1u8; 31]), Err(CryptoError::InvalidKey));
        assert_eq!(PrivateKey::from_slice(&CURVE_ORDER), Err(CryptoError::InvalidKey));
    }

    #[test]
    fn should_parse_public_key_hex() {
        let hex = "034151a3ec46b5670a682b0a63394f863587d1bc97483b1b6c70eb58e7f0aed192";
        let key = hex.parse::<PublicKey>().unwrap();
        assert_eq!(key.to_string(), hex);
        assert_eq!(key, KeyPair::from_passphrase("this is a top secret passphrase").public);
    }

    #[test]
    fn should_reject_malformed_public_key() {
        assert_eq!("034151a3".parse::<PublicKey>(), Err(CryptoError::InvalidKey));
        assert_eq!("zz".parse::<PublicKey>(), Err(CryptoError::InvalidKey));
        assert_eq!(PublicKey::from_slice(&[0u8; 33]), Err(CryptoError::InvalidKey));
        let mut not_on_curve = [0xffu8; 33];
        not_on_curve[0] = 0x02;
        assert_eq!(PublicKey::from_slice(&not_on_curve), Err(CryptoError::InvalidKey));
    }

    #[test]
    fn should_reject_uncompressed_public_key() {
        let secp = KeyPair::from_passphrase("first passphrase").public;
        let uncompressed = secp.as_secp().serialize_uncompressed();
        assert_eq!(PublicKey::from_slice(&uncompressed), Err(CryptoError::InvalidKey));
    }

    #[test]
    fn should_export_wif() {
        let pk = PrivateKey::from_passphrase("this is a top secret passphrase");
        assert_eq!(
            pk.to_wif(&MAINNET),
            "SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA"
        );
    }

    #[test]
    fn should_import_wif() {
        let pk = PrivateKey::from_wif("SGq4xLgZKCGxs7bjmwnBrWcT4C1ADFEermj846KC97FSv1WFD1dA", &DEVNET)
            .unwrap();
        assert_eq!(pk, PrivateKey::from_passphrase("this is a top secret passphrase"));
    }

    #[test]
    fn should_reject_wif_of_other_network() {
        let bitcoin_like = NetworkParams { wif: 0x80, ..MAINNET };
        let wif = PrivateKey::from_passphrase("x").to_wif(&MAINNET);
        assert_eq!(PrivateKey::from_wif(&wif, &bitcoin_like), Err(CryptoError::InvalidKey));
        assert_eq!(PrivateKey::from_wif("SGq4xLgZ", &MAINNET), Err(CryptoError::InvalidKey));
    }

    #[test]
    fn should_not_print_private_key() {
        let keys = KeyPair::from_passphrase("this is a top secret passphrase");
        let debug = format!("{:?}", keys);
        assert!(!debug.contains("d8839c24"));
        assert!(debug.contains("034151a3"));
    }
}
