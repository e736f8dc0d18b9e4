// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use id::{CommitVersion, JobId, RowId, SchemaId, SchemaVersion, TableId};
pub use key::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind};

mod id;
pub mod interface;
pub mod key;
