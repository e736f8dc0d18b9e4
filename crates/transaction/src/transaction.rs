// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{CommitVersion, EncodedKey, EncodedKeyRange};

use crate::Result;

/// A read-write transaction over the ordered key space.
///
/// Writes stay private to the transaction until [`Transaction::commit`] applies all of them at
/// once. A transaction that is dropped without committing leaves the store untouched.
pub trait Transaction {
	/// Commit version the transaction started from.
	fn version(&self) -> CommitVersion;

	fn get(&mut self, key: &EncodedKey) -> Result<Option<Vec<u8>>>;

	fn contains_key(&mut self, key: &EncodedKey) -> Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	fn set(&mut self, key: &EncodedKey, value: Vec<u8>) -> Result<()>;

	fn remove(&mut self, key: &EncodedKey) -> Result<()>;

	/// Returns at most `limit` entries of `range` in key order, including this transaction's own
	/// uncommitted writes.
	fn range(&mut self, range: EncodedKeyRange, limit: usize) -> Result<Vec<(EncodedKey, Vec<u8>)>>;

	fn commit(&mut self) -> Result<CommitVersion>;

	fn rollback(&mut self) -> Result<()>;

	/// Removes at most `limit` keys starting with `prefix` and returns how many were removed.
	fn delete_prefix(&mut self, prefix: &EncodedKey, limit: usize) -> Result<usize> {
		let entries = self.range(EncodedKeyRange::prefix(prefix), limit)?;
		for (key, _) in &entries {
			self.remove(key)?;
		}
		Ok(entries.len())
	}
}

pub trait TransactionStore: Clone + Send + Sync + 'static {
	type Transaction: Transaction;

	fn begin(&self) -> Self::Transaction;
}
