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
//! # ARK v1 transactions
//!
//! A transaction is a common envelope (amounts, timestamp, sender, signatures) and a
//! type specific `TransactionAsset`. The asset also defines the type tag, so a transfer
//! can't carry votes and a vote can't carry a recipient.

mod builder;
#[cfg(test)]
pub(crate) mod fixtures;
mod serialize;
mod signing;

pub use self::builder::{
    create_delegate, create_second_signature, create_transfer, create_vote, TransactionBuilder,
};
pub use self::signing::SignatureState;

use crate::{address::Address, crypto::PublicKey, error::CryptoError, network::NetworkParams};
use regex::Regex;
use std::{convert::TryFrom, fmt, str::FromStr};

/// Max length of a vendor field in bytes
pub const VENDOR_FIELD_BYTES: usize = 64;

/// Max length of a delegate username in characters
pub const USERNAME_MAX_LENGTH: usize = 20;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[a-z0-9!@$&_.]+$").unwrap();
    static ref VOTE_RE: Regex = Regex::new(r"^[+-][0-9a-f]{66}$").unwrap();
}

/// Transaction type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Value transfer
    Transfer = 0,
    /// Second signature registration
    SecondSignature = 1,
    /// Delegate registration
    DelegateRegistration = 2,
    /// Delegate vote
    Vote = 3,
}

impl TransactionType {
    /// Fee applied when a builder isn't given an explicit one
    pub fn default_fee(&self) -> u64 {
        match self {
            TransactionType::Transfer => 10_000_000,
            TransactionType::SecondSignature => 500_000_000,
            TransactionType::DelegateRegistration => 2_500_000_000,
            TransactionType::Vote => 100_000_000,
        }
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = CryptoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionType::Transfer),
            1 => Ok(TransactionType::SecondSignature),
            2 => Ok(TransactionType::DelegateRegistration),
            3 => Ok(TransactionType::Vote),
            _ => Err(CryptoError::MalformedTransaction(format!(
                "unknown transaction type {}",
                value
            ))),
        }
    }
}

/// Free text attached to a transaction, 1 to `VENDOR_FIELD_BYTES` of UTF-8 without NUL.
///
/// The canonical bytes pad the field with zeroes, so an empty or NUL-terminated value
/// would encode the same as an absent one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VendorField(String);

impl VendorField {
    /// Check the length and content of a vendor field
    pub fn new<S: Into<String>>(value: S) -> Result<Self, CryptoError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CryptoError::InvalidArgument("empty vendor field".to_string()));
        }
        if value.contains('\0') {
            return Err(CryptoError::InvalidArgument(
                "vendor field contains NUL".to_string(),
            ));
        }
        if value.len() > VENDOR_FIELD_BYTES {
            return Err(CryptoError::InvalidArgument(format!(
                "vendor field is {} bytes, max is {}",
                value.len(),
                VENDOR_FIELD_BYTES
            )));
        }
        Ok(VendorField(value))
    }

    /// Text of the field
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VendorField {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VendorField::new(s)
    }
}

impl fmt::Display for VendorField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for VendorField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Direction of a vote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteAction {
    /// `+`, vote for a delegate
    Add,
    /// `-`, withdraw a vote
    Remove,
}

/// Vote directive, written as `+` or `-` followed by the delegate public key in hex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vote {
    /// Vote or unvote
    pub action: VoteAction,
    /// Delegate public key
    pub public_key: PublicKey,
}

impl Vote {
    /// Vote for a delegate
    pub fn add(public_key: PublicKey) -> Self {
        Vote { action: VoteAction::Add, public_key }
    }

    /// Withdraw a vote
    pub fn remove(public_key: PublicKey) -> Self {
        Vote { action: VoteAction::Remove, public_key }
    }
}

impl FromStr for Vote {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VOTE_RE.is_match(s) {
            return Err(CryptoError::InvalidArgument(format!("invalid vote: {}", s)));
        }
        let (sign, key) = s.split_at(1);
        let action = if sign == "+" { VoteAction::Add } else { VoteAction::Remove };
        let public_key = key
            .parse::<PublicKey>()
            .map_err(|_| CryptoError::InvalidArgument(format!("invalid vote key: {}", key)))?;
        Ok(Vote { action, public_key })
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = match self.action {
            VoteAction::Add => '+',
            VoteAction::Remove => '-',
        };
        write!(f, "{}{}", sign, self.public_key)
    }
}

/// Type specific part of a transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionAsset {
    /// Move `amount` to the recipient
    Transfer {
        /// Address credited with the amount
        recipient: Address,
    },
    /// Register a second public key, which must co-sign all further transactions
    SecondSignature {
        /// Key derived from the second passphrase
        public_key: PublicKey,
    },
    /// Register the sender as a delegate
    DelegateRegistration {
        /// Name of the delegate
        username: String,
    },
    /// Vote for (or unvote) delegates
    Vote {
        /// Directives in the order they are signed
        votes: Vec<Vote>,
    },
}

impl TransactionAsset {
    /// Type tag implied by the asset
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionAsset::Transfer { .. } => TransactionType::Transfer,
            TransactionAsset::SecondSignature { .. } => TransactionType::SecondSignature,
            TransactionAsset::DelegateRegistration { .. } => TransactionType::DelegateRegistration,
            TransactionAsset::Vote { .. } => TransactionType::Vote,
        }
    }
}

/// Transaction data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "crate::convert::json::TransactionJson")]
#[serde(try_from = "crate::convert::json::TransactionJson")]
pub struct Transaction {
    /// Type specific payload
    pub asset: TransactionAsset,

    /// Value transferred with transaction, zero for anything but transfers
    pub amount: u64,

    /// Fee paid to the forging delegate
    pub fee: u64,

    /// Seconds since the network epoch
    pub timestamp: u32,

    /// Key of the sender, set by signing
    pub sender_public_key: PublicKey,

    /// Optional memo
    pub vendor_field: Option<VendorField>,

    /// DER signature by the sender key
    pub signature: Option<Vec<u8>>,

    /// DER signature by the registered second key
    pub sign_signature: Option<Vec<u8>>,
}

impl Transaction {
    /// Type tag implied by the asset
    pub fn transaction_type(&self) -> TransactionType {
        self.asset.transaction_type()
    }

    /// Recipient of a transfer
    pub fn recipient(&self) -> Option<&Address> {
        match &self.asset {
            TransactionAsset::Transfer { recipient } => Some(recipient),
            _ => None,
        }
    }

    /// Address of the sender on the specified network
    pub fn sender_address(&self, params: &NetworkParams) -> Address {
        Address::from_public_key(&self.sender_public_key, params)
    }
}

/// Check a delegate username: lowercase letters, digits and `!@$&_.`, 1 to 20 chars
pub fn validate_username(username: &str) -> Result<(), CryptoError> {
    if username.is_empty() {
        return Err(CryptoError::InvalidArgument("empty delegate username".to_string()));
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(CryptoError::InvalidArgument(format!(
            "delegate username is longer than {} chars",
            USERNAME_MAX_LENGTH
        )));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(CryptoError::InvalidArgument(format!(
            "invalid delegate username: {}",
            username
        )));
    }
    Ok(())
}

/// Check a vote list: non-empty and each delegate mentioned once
pub fn validate_votes(votes: &[Vote]) -> Result<(), CryptoError> {
    if votes.is_empty() {
        return Err(CryptoError::InvalidArgument("empty vote list".to_string()));
    }
    for (i, vote) in votes.iter().enumerate() {
        if votes[..i].iter().any(|v| v.public_key == vote.public_key) {
            return Err(CryptoError::InvalidArgument(format!(
                "duplicate vote for {}",
                vote.public_key
            )));
        }
    }
    Ok(())
}
