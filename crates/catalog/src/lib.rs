// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use allocator::Allocator;
pub use error::CatalogError;

mod allocator;
mod codec;
mod error;
mod history;
mod schema;
mod table;
pub mod test_utils;
mod version;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Schema-scoped access to persisted catalog objects.
///
/// Every operation runs inside the caller's transaction, so a descriptor change, the version
/// bump and the history entry of one step commit together or not at all.
pub struct CatalogStore;
