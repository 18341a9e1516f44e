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
use crate::{
    address::Address,
    crypto::PublicKey,
    error::CryptoError,
    transaction::{
        validate_username, validate_votes, Transaction, TransactionAsset, TransactionType,
        VendorField, Vote,
    },
};
use serde::Deserialize;
use std::convert::TryFrom;

type HexString = String;

/// Transaction as JSON document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionJson {
    /// Type tag, see `TransactionType`
    #[serde(rename = "type")]
    pub tx_type: u8,
    /// Amount in arktoshi
    pub amount: u64,
    /// Fee in arktoshi
    pub fee: u64,
    /// Seconds since the network epoch
    pub timestamp: u32,
    /// Hex of the compressed sender public key
    pub sender_public_key: PublicKey,
    /// Recipient address, transfers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<Address>,
    /// Memo text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_field: Option<String>,
    /// Type specific payload
    pub asset: AssetJson,
    /// DER signature by the sender, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<HexString>,
    /// DER second signature, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_signature: Option<HexString>,
    /// Hex of the transaction id, present once the transaction is signed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HexString>,
}

/// Type specific payload, empty for transfers
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssetJson {
    /// Second signature registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SecondSignatureJson>,
    /// Delegate registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate: Option<DelegateJson>,
    /// Vote directives, `+<public key>` or `-<public key>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<Vec<String>>,
}

/// Public key registered as second signature key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecondSignatureJson {
    /// Hex of the compressed public key
    pub public_key: PublicKey,
}

/// Delegate to register
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DelegateJson {
    /// Delegate name
    pub username: String,
}

impl From<&Transaction> for TransactionJson {
    fn from(tx: &Transaction) -> Self {
        let mut asset = AssetJson::default();
        let mut recipient_id = None;
        match &tx.asset {
            TransactionAsset::Transfer { recipient } => recipient_id = Some(*recipient),
            TransactionAsset::SecondSignature { public_key } => {
                asset.signature = Some(SecondSignatureJson { public_key: *public_key })
            }
            TransactionAsset::DelegateRegistration { username } => {
                asset.delegate = Some(DelegateJson { username: username.clone() })
            }
            TransactionAsset::Vote { votes } => {
                asset.votes = Some(votes.iter().map(|v| v.to_string()).collect())
            }
        }

        TransactionJson {
            tx_type: tx.transaction_type() as u8,
            amount: tx.amount,
            fee: tx.fee,
            timestamp: tx.timestamp,
            sender_public_key: tx.sender_public_key,
            recipient_id,
            vendor_field: tx.vendor_field.as_ref().map(|v| v.as_str().to_string()),
            asset,
            signature: tx.signature.as_ref().map(hex::encode),
            sign_signature: tx.sign_signature.as_ref().map(hex::encode),
            id: tx.id(),
        }
    }
}

impl From<Transaction> for TransactionJson {
    fn from(tx: Transaction) -> Self {
        TransactionJson::from(&tx)
    }
}

fn malformed(err: CryptoError) -> CryptoError {
    match err {
        CryptoError::InvalidArgument(msg) => CryptoError::MalformedTransaction(msg),
        CryptoError::InvalidKey => CryptoError::MalformedTransaction("invalid key".to_string()),
        other => other,
    }
}

fn decode_signature(value: Option<HexString>, field: &str) -> Result<Option<Vec<u8>>, CryptoError> {
    value
        .map(|s| {
            hex::decode(&s).map_err(|_| {
                CryptoError::MalformedTransaction(format!("{} is not a hex string", field))
            })
        })
        .transpose()
}

impl TryFrom<TransactionJson> for Transaction {
    type Error = CryptoError;

    fn try_from(value: TransactionJson) -> Result<Self, Self::Error> {
        let tx_type = TransactionType::try_from(value.tx_type)?;
        let AssetJson { signature, delegate, votes } = value.asset;

        if tx_type != TransactionType::Transfer && value.recipient_id.is_some() {
            return Err(CryptoError::MalformedTransaction(format!(
                "recipientId on a {:?} transaction",
                tx_type
            )));
        }

        let asset = match (tx_type, signature, delegate, votes) {
            (TransactionType::Transfer, None, None, None) => {
                let recipient = value.recipient_id.ok_or_else(|| {
                    CryptoError::MalformedTransaction("transfer without recipientId".to_string())
                })?;
                TransactionAsset::Transfer { recipient }
            }
            (TransactionType::SecondSignature, Some(s), None, None) => {
                TransactionAsset::SecondSignature { public_key: s.public_key }
            }
            (TransactionType::DelegateRegistration, None, Some(d), None) => {
                validate_username(&d.username).map_err(malformed)?;
                TransactionAsset::DelegateRegistration { username: d.username }
            }
            (TransactionType::Vote, None, None, Some(votes)) => {
                let votes = votes
                    .iter()
                    .map(|v| v.parse::<Vote>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(malformed)?;
                validate_votes(&votes).map_err(malformed)?;
                TransactionAsset::Vote { votes }
            }
            (tx_type, ..) => {
                return Err(CryptoError::MalformedTransaction(format!(
                    "asset doesn't match {:?} transaction",
                    tx_type
                )))
            }
        };

        let vendor_field = value
            .vendor_field
            .map(VendorField::new)
            .transpose()
            .map_err(malformed)?;
        let signature = decode_signature(value.signature, "signature")?;
        let sign_signature = decode_signature(value.sign_signature, "signSignature")?;
        if signature.is_none() && sign_signature.is_some() {
            return Err(CryptoError::MalformedTransaction(
                "signSignature without signature".to_string(),
            ));
        }

        let tx = Transaction {
            asset,
            amount: value.amount,
            fee: value.fee,
            timestamp: value.timestamp,
            sender_public_key: value.sender_public_key,
            vendor_field,
            signature,
            sign_signature,
        };

        if let Some(id) = value.id {
            let matches = tx.id().map_or(false, |expected| expected.eq_ignore_ascii_case(&id));
            if !matches {
                return Err(CryptoError::MalformedTransaction(format!(
                    "id {} doesn't match transaction",
                    id
                )));
            }
        }
        Ok(tx)
    }
}

impl Transaction {
    /// JSON document of the transaction, with `id` when signed
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(TransactionJson::from(self))
            .expect("Expect transaction to be convertible to JSON")
    }

    /// Compact JSON text of the transaction
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Parse a JSON document, checking its structure and `id`
    pub fn from_json(value: &serde_json::Value) -> Result<Transaction, CryptoError> {
        let json = TransactionJson::deserialize(value).map_err(CryptoError::from)?;
        Transaction::try_from(json)
    }

    /// Parse JSON text, see `from_json`
    pub fn from_json_str(value: &str) -> Result<Transaction, CryptoError> {
        let json: TransactionJson = serde_json::from_str(value)?;
        Transaction::try_from(json)
    }
}
