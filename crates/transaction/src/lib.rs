// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::TransactionError;
pub use memory::{MemoryStore, MemoryTransaction};
pub use transaction::{Transaction, TransactionStore};

mod error;
mod memory;
mod transaction;

pub type Result<T> = std::result::Result<T, TransactionError>;
