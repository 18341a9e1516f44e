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
//! # JSON representation of transactions
//!
//! Field names follow the ARK node API, so a document produced here can be posted to a
//! node as is.

mod address;
mod transaction;

pub use self::transaction::{AssetJson, DelegateJson, SecondSignatureJson, TransactionJson};
