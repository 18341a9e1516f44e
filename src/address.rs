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
//! # Base58check account addresses
//!
//! An address is `base58check([network version][RIPEMD-160(compressed public key)])`.

use crate::{
    crypto::{KeyPair, PublicKey},
    error::CryptoError,
    network::NetworkParams,
    util::{ripemd160, to_arr, RIPEMD160_BYTES},
};
use bitcoin::util::base58;
use std::{fmt, str::FromStr};

/// Decoded address length in bytes, version byte included
pub const ADDRESS_BYTES: usize = RIPEMD160_BYTES + 1;

/// Account address
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    version: u8,
    hash: [u8; RIPEMD160_BYTES],
}

impl Address {
    /// Address of a public key on the specified network
    ///
    /// # Example
    ///
    /// ```
    /// use ark_crypto::{Address, KeyPair, MAINNET};
    ///
    /// let keys = KeyPair::from_passphrase("this is a top secret passphrase");
    /// let address = Address::from_public_key(&keys.public, &MAINNET);
    /// assert_eq!(address.to_string(), "AGeYmgbg2LgGxRW2vNNJvQ88PknEJsYizC");
    /// ```
    pub fn from_public_key(public_key: &PublicKey, params: &NetworkParams) -> Self {
        Address {
            version: params.version,
            hash: ripemd160(&public_key.serialize()),
        }
    }

    /// Address of a compressed public key given as raw bytes
    pub fn from_public_key_bytes(data: &[u8], params: &NetworkParams) -> Result<Self, CryptoError> {
        let public_key = PublicKey::from_slice(data)?;
        Ok(Address::from_public_key(&public_key, params))
    }

    /// Address of the key pair derived from a passphrase
    pub fn from_passphrase(passphrase: &str, params: &NetworkParams) -> Self {
        Address::from_public_key(&KeyPair::from_passphrase(passphrase).public, params)
    }

    /// Try to convert decoded bytes (version byte and hash) into `Address`
    pub fn from_slice(data: &[u8]) -> Result<Self, CryptoError> {
        if data.len() != ADDRESS_BYTES {
            return Err(CryptoError::InvalidArgument(format!(
                "address must be {} bytes, got {}",
                ADDRESS_BYTES,
                data.len()
            )));
        }
        Ok(Address {
            version: data[0],
            hash: to_arr(&data[1..]),
        })
    }

    /// Network version byte
    pub fn version(&self) -> u8 {
        self.version
    }

    /// RIPEMD-160 of the public key
    pub fn hash(&self) -> &[u8; RIPEMD160_BYTES] {
        &self.hash
    }

    /// Version byte followed by the public key hash
    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        let mut buf = [0u8; ADDRESS_BYTES];
        buf[0] = self.version;
        buf[1..].copy_from_slice(&self.hash);
        buf
    }

    /// Check that the address belongs to the specified network
    pub fn is_valid_for(&self, params: &NetworkParams) -> bool {
        self.version == params.version
    }

    /// Check that a string is a well formed address of the specified network
    pub fn validate(value: &str, params: &NetworkParams) -> bool {
        value
            .parse::<Address>()
            .map(|address| address.is_valid_for(params))
            .unwrap_or(false)
    }
}

impl FromStr for Address {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = base58::from_check(s)?;
        Address::from_slice(&data)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&base58::check_encode_slice(&self.to_bytes()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DEVNET, MAINNET};
    use crate::util::tests::*;

    const PASSPHRASE: &str = "this is a top secret passphrase";

    #[test]
    fn should_derive_mainnet_address() {
        assert_eq!(
            Address::from_passphrase(PASSPHRASE, &MAINNET).to_string(),
            "AGeYmgbg2LgGxRW2vNNJvQ88PknEJsYizC"
        );
    }

    #[test]
    fn should_derive_devnet_address() {
        assert_eq!(
            Address::from_passphrase(PASSPHRASE, &DEVNET).to_string(),
            "D61mfSggzbvQgTUe6JhYKH2doHaqJ3Dyib"
        );
    }

    #[test]
    fn should_derive_address_of_empty_passphrase() {
        assert_eq!(
            Address::from_passphrase("", &MAINNET).to_string(),
            "AJKRJzgojmx9z7Dj7v5qf22UrbHXWSfAKL"
        );
    }

    #[test]
    fn should_derive_from_public_key_bytes() {
        let key = hex::decode("02877e4f35c76abaeb152b128670db0a7ae10b3999afcd28a42938b653fbf87ae9")
            .unwrap();
        assert_eq!(
            Address::from_public_key_bytes(&key, &DEVNET).unwrap().to_string(),
            "D5BAk2kkHbExxMEy5bdJm7DdM3KkXoZGq7"
        );
    }

    #[test]
    fn should_hash_public_key() {
        let address = Address::from_passphrase(PASSPHRASE, &MAINNET);
        assert_eq!(address.version(), 0x17);
        assert_eq!(
            address.hash(),
            &to_20bytes("0995750207ecaf0ccf251c1265b92ad84f553662")
        );
    }

    #[test]
    fn should_fail_for_short_public_key() {
        assert_eq!(
            Address::from_public_key_bytes(&[0x03, 0x41, 0x51], &MAINNET),
            Err(CryptoError::InvalidKey)
        );
        assert_eq!(
            Address::from_public_key_bytes(&[], &MAINNET),
            Err(CryptoError::InvalidKey)
        );
    }

    #[test]
    fn should_parse_address() {
        let address = "AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM25".parse::<Address>().unwrap();
        assert_eq!(
            hex::encode(address.to_bytes()),
            "17afd242cc844425161e373aeaf6a6a09fe5bf54a8"
        );
        assert_eq!(address.to_string(), "AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM25");
    }

    #[test]
    fn should_catch_wrong_checksum() {
        assert!("AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM26".parse::<Address>().is_err());
    }

    #[test]
    fn should_catch_wrong_alphabet() {
        assert!("AXoXnFi4z1Z6aFvjEYkDVCtBGW2PaRiM2O".parse::<Address>().is_err());
    }

    #[test]
    fn should_catch_empty_address_string() {
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn should_catch_wrong_length() {
        let short = base58::check_encode_slice(&[0x17, 0x01, 0x02]);
        assert!(matches!(
            short.parse::<Address>(),
            Err(CryptoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn should_validate_network() {
        assert!(Address::validate("AGeYmgbg2LgGxRW2vNNJvQ88PknEJsYizC", &MAINNET));
        assert!(!Address::validate("AGeYmgbg2LgGxRW2vNNJvQ88PknEJsYizC", &DEVNET));
        assert!(Address::validate("D61mfSggzbvQgTUe6JhYKH2doHaqJ3Dyib", &DEVNET));
        assert!(!Address::validate("not an address", &MAINNET));
    }
}
