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
//! # Building signed transactions
//!
//! `TransactionBuilder` validates the inputs, fills in the envelope and signs. The
//! `create_*` functions are shortcuts for the common case of default fees and the
//! current time.

use super::{validate_username, validate_votes, Transaction, TransactionAsset, VendorField, Vote};
use crate::{
    address::Address,
    crypto::{KeyPair, PublicKey},
    error::CryptoError,
    network::NetworkParams,
};

/// Accumulates transaction parameters before signing
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    asset: TransactionAsset,
    amount: u64,
    fee: Option<u64>,
    vendor_field: Option<String>,
    timestamp: Option<u32>,
}

impl TransactionBuilder {
    fn new(asset: TransactionAsset, amount: u64) -> Self {
        TransactionBuilder {
            asset,
            amount,
            fee: None,
            vendor_field: None,
            timestamp: None,
        }
    }

    /// Transfer `amount` to `recipient`
    pub fn transfer(recipient: Address, amount: u64) -> Self {
        TransactionBuilder::new(TransactionAsset::Transfer { recipient }, amount)
    }

    /// Register `public_key` as the second signature key of the sender
    pub fn second_signature(public_key: PublicKey) -> Self {
        TransactionBuilder::new(TransactionAsset::SecondSignature { public_key }, 0)
    }

    /// Register the sender as a delegate
    pub fn delegate<S: Into<String>>(username: S) -> Self {
        TransactionBuilder::new(
            TransactionAsset::DelegateRegistration { username: username.into() },
            0,
        )
    }

    /// Vote for or against delegates
    pub fn vote(votes: Vec<Vote>) -> Self {
        TransactionBuilder::new(TransactionAsset::Vote { votes }, 0)
    }

    /// Use a fee other than the default for the transaction type
    pub fn fee(mut self, fee: u64) -> Self {
        self.fee = Some(fee);
        self
    }

    /// Attach a vendor field; an empty one means no vendor field
    pub fn vendor_field<S: Into<String>>(mut self, value: S) -> Self {
        self.vendor_field = Some(value.into());
        self
    }

    /// Use a fixed timestamp instead of the current time
    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate the parameters and make an unsigned transaction
    pub fn build(self, sender: PublicKey, params: &NetworkParams) -> Result<Transaction, CryptoError> {
        match &self.asset {
            TransactionAsset::Transfer { recipient } => {
                if self.amount == 0 {
                    return Err(CryptoError::InvalidArgument("zero transfer amount".to_string()));
                }
                if !recipient.is_valid_for(params) {
                    return Err(CryptoError::InvalidArgument(format!(
                        "recipient {} is not an address of the network",
                        recipient
                    )));
                }
            }
            TransactionAsset::SecondSignature { .. } => {}
            TransactionAsset::DelegateRegistration { username } => validate_username(username)?,
            TransactionAsset::Vote { votes } => validate_votes(votes)?,
        }

        let vendor_field = self
            .vendor_field
            .filter(|value| !value.is_empty())
            .map(VendorField::new)
            .transpose()?;
        let timestamp = match self.timestamp {
            Some(timestamp) => timestamp,
            None => params.timestamp_now()?,
        };
        let fee = self
            .fee
            .unwrap_or_else(|| self.asset.transaction_type().default_fee());

        Ok(Transaction {
            asset: self.asset,
            amount: self.amount,
            fee,
            timestamp,
            sender_public_key: sender,
            vendor_field,
            signature: None,
            sign_signature: None,
        })
    }

    /// Build and sign with the sender passphrase, then with the second passphrase if given
    pub fn sign(
        self,
        passphrase: &str,
        second_passphrase: Option<&str>,
        params: &NetworkParams,
    ) -> Result<Transaction, CryptoError> {
        let keys = KeyPair::from_passphrase(passphrase);
        let mut tx = self.build(keys.public, params)?;
        tx.sign(&keys);
        if let Some(second_passphrase) = second_passphrase {
            tx.second_sign(&KeyPair::from_passphrase(second_passphrase).private)?;
        }
        Ok(tx)
    }
}

/// Create a signed transfer
pub fn create_transfer(
    recipient: &str,
    amount: u64,
    vendor_field: Option<&str>,
    passphrase: &str,
    second_passphrase: Option<&str>,
    params: &NetworkParams,
) -> Result<Transaction, CryptoError> {
    let recipient = recipient.parse::<Address>()?;
    let mut builder = TransactionBuilder::transfer(recipient, amount);
    if let Some(value) = vendor_field {
        builder = builder.vendor_field(value);
    }
    builder.sign(passphrase, second_passphrase, params)
}

/// Create a signed registration of the key derived from `second_passphrase`.
///
/// The second key signs nothing here: it becomes mandatory only for the transactions
/// which follow the registration.
pub fn create_second_signature(
    passphrase: &str,
    second_passphrase: &str,
    params: &NetworkParams,
) -> Result<Transaction, CryptoError> {
    let second = KeyPair::from_passphrase(second_passphrase);
    TransactionBuilder::second_signature(second.public).sign(passphrase, None, params)
}

/// Create a signed delegate registration
pub fn create_delegate(
    username: &str,
    passphrase: &str,
    second_passphrase: Option<&str>,
    params: &NetworkParams,
) -> Result<Transaction, CryptoError> {
    TransactionBuilder::delegate(username).sign(passphrase, second_passphrase, params)
}

/// Create a signed vote from `+<public key>` / `-<public key>` directives
pub fn create_vote<S: AsRef<str>>(
    votes: &[S],
    passphrase: &str,
    second_passphrase: Option<&str>,
    params: &NetworkParams,
) -> Result<Transaction, CryptoError> {
    let votes = votes
        .iter()
        .map(|v| v.as_ref().parse::<Vote>())
        .collect::<Result<Vec<_>, _>>()?;
    TransactionBuilder::vote(votes).sign(passphrase, second_passphrase, params)
}
