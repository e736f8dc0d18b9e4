// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Online table DDL.
//!
//! A job is advanced by repeated calls to [`Ddl::step`]. Each call opens one transaction, moves
//! the target table at most one lifecycle phase forward (or removes one bounded batch of
//! orphaned records) and reports a [`JobOutcome`]. The scheduler persists the outcome and calls
//! again until the job is finished.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use config::DdlConfig;
pub use error::{DdlError, ErrorClass};
pub use handle::TableHandle;
pub use outcome::JobOutcome;
use strata_transaction::TransactionStore;

mod config;
mod error;
mod handle;
mod outcome;
mod reclaim;
mod step;
mod table;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, DdlError>;

pub struct Ddl<S: TransactionStore> {
	store: S,
	config: DdlConfig,
}

impl<S: TransactionStore> Ddl<S> {
	pub fn new(store: S, config: DdlConfig) -> Self {
		Self {
			store,
			config,
		}
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn config(&self) -> &DdlConfig {
		&self.config
	}
}
