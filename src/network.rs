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
//! # Network parameters
//!
//! A network is selected by passing its `NetworkParams` into every operation
//! which depends on it. There is no process-wide "current network".

use crate::error::CryptoError;
use chrono::{DateTime, TimeZone, Utc};
use std::{convert::TryFrom, fmt, str::FromStr};

/// `2017-03-21T13:00:00Z`, the genesis time of both public networks
pub const ARK_EPOCH: i64 = 1_490_101_200;

/// Parameters of ARK Mainnet, addresses start with `A`
pub const MAINNET: NetworkParams = NetworkParams {
    version: 0x17,
    wif: 0xaa,
    epoch: ARK_EPOCH,
};

/// Parameters of ARK Devnet, addresses start with `D`
pub const DEVNET: NetworkParams = NetworkParams {
    version: 0x1e,
    wif: 0xaa,
    epoch: ARK_EPOCH,
};

/// Network specific constants used for addresses, keys and timestamps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Address version byte
    pub version: u8,
    /// Version byte of WIF encoded private keys
    pub wif: u8,
    /// Network epoch as unix seconds; transaction timestamps count from it
    pub epoch: i64,
}

impl NetworkParams {
    /// Seconds elapsed since the network epoch at the specified moment
    pub fn timestamp_at(&self, at: DateTime<Utc>) -> Result<u32, CryptoError> {
        u32::try_from(at.timestamp() - self.epoch).map_err(|_| {
            CryptoError::InvalidArgument(format!("time {} is out of network epoch range", at))
        })
    }

    /// Seconds elapsed since the network epoch now
    pub fn timestamp_now(&self) -> Result<u32, CryptoError> {
        self.timestamp_at(Utc::now())
    }

    /// Moment in time referenced by a transaction timestamp
    pub fn datetime_of(&self, timestamp: u32) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.epoch + i64::from(timestamp), 0).single()
    }
}

/// Predefined networks
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Network {
    /// ARK Mainnet
    Mainnet,
    /// ARK Devnet
    Devnet,
}

impl Network {
    /// Parameters of the network
    pub fn params(&self) -> NetworkParams {
        match self {
            Network::Mainnet => MAINNET,
            Network::Devnet => DEVNET,
        }
    }
}

impl From<Network> for NetworkParams {
    fn from(network: Network) -> Self {
        network.params()
    }
}

impl TryFrom<u8> for Network {
    type Error = ();

    /// Find a predefined network by its address version byte
    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            v if v == MAINNET.version => Ok(Network::Mainnet),
            v if v == DEVNET.version => Ok(Network::Devnet),
            _ => Err(()),
        }
    }
}

impl FromStr for Network {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().to_lowercase();
        match clean.as_str() {
            "mainnet" | "main" | "ark" => Ok(Network::Mainnet),
            "devnet" | "dev" | "dark" => Ok(Network::Devnet),
            _ => Err(CryptoError::InvalidArgument(format!("unknown network: {}", s))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Devnet => f.write_str("devnet"),
        }
    }
}
