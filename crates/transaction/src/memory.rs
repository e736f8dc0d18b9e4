// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory store with optimistic concurrency control.
//!
//! A transaction records every key and range it reads. On commit it checks whether any of them
//! was committed by another transaction after it began. If so, the commit fails with
//! [`TransactionError::Conflict`] and nothing is applied. Otherwise all pending writes are
//! applied under one write lock and stamped with a fresh [`CommitVersion`].
//!
//! Only modifications newer than the oldest running transaction can still cause a conflict, so
//! older entries of the modification log are pruned on every commit.

use std::{
	cmp::Ordering,
	collections::{BTreeMap, BTreeSet},
	sync::Arc,
};

use parking_lot::RwLock;
use strata_core::{CommitVersion, EncodedKey, EncodedKeyRange};
use tracing::{instrument, trace};

use crate::{Result, Transaction, TransactionError, TransactionStore};

#[derive(Clone, Default)]
pub struct MemoryStore {
	inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
	data: BTreeMap<EncodedKey, Vec<u8>>,
	/// Last commit version that wrote or removed each key.
	modified: BTreeMap<EncodedKey, CommitVersion>,
	/// Number of running transactions per begin version.
	active: BTreeMap<CommitVersion, usize>,
	version: CommitVersion,
}

impl Inner {
	fn release(&mut self, version: CommitVersion) {
		if let Some(count) = self.active.get_mut(&version) {
			*count -= 1;
			if *count == 0 {
				self.active.remove(&version);
			}
		}
	}

	fn prune(&mut self) {
		match self.active.keys().next().copied() {
			Some(oldest) => self.modified.retain(|_, version| *version > oldest),
			None => self.modified.clear(),
		}
	}
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn version(&self) -> CommitVersion {
		self.inner.read().version
	}

	#[cfg(test)]
	fn tracked_modifications(&self) -> usize {
		self.inner.read().modified.len()
	}
}

impl TransactionStore for MemoryStore {
	type Transaction = MemoryTransaction;

	fn begin(&self) -> MemoryTransaction {
		let version = {
			let mut inner = self.inner.write();
			let version = inner.version;
			*inner.active.entry(version).or_default() += 1;
			version
		};
		MemoryTransaction {
			store: self.clone(),
			version,
			reads: BTreeSet::new(),
			range_reads: Vec::new(),
			pending: BTreeMap::new(),
			discarded: false,
		}
	}
}

pub struct MemoryTransaction {
	store: MemoryStore,
	version: CommitVersion,
	reads: BTreeSet<EncodedKey>,
	range_reads: Vec<EncodedKeyRange>,
	/// `None` marks a removal.
	pending: BTreeMap<EncodedKey, Option<Vec<u8>>>,
	discarded: bool,
}

impl MemoryTransaction {
	fn ensure_active(&self) -> Result<()> {
		if self.discarded {
			return Err(TransactionError::Discarded);
		}
		Ok(())
	}

	fn has_conflict(&self, inner: &Inner) -> bool {
		let newer = |version: &CommitVersion| *version > self.version;

		self.reads.iter().any(|key| inner.modified.get(key).is_some_and(newer))
			|| self.range_reads.iter().any(|range| inner.modified.range(range.clone()).any(|(_, v)| newer(v)))
	}
}

impl Transaction for MemoryTransaction {
	fn version(&self) -> CommitVersion {
		self.version
	}

	fn get(&mut self, key: &EncodedKey) -> Result<Option<Vec<u8>>> {
		self.ensure_active()?;
		if let Some(value) = self.pending.get(key) {
			return Ok(value.clone());
		}
		self.reads.insert(key.clone());
		Ok(self.store.inner.read().data.get(key).cloned())
	}

	fn set(&mut self, key: &EncodedKey, value: Vec<u8>) -> Result<()> {
		self.ensure_active()?;
		self.pending.insert(key.clone(), Some(value));
		Ok(())
	}

	fn remove(&mut self, key: &EncodedKey) -> Result<()> {
		self.ensure_active()?;
		self.pending.insert(key.clone(), None);
		Ok(())
	}

	fn range(&mut self, range: EncodedKeyRange, limit: usize) -> Result<Vec<(EncodedKey, Vec<u8>)>> {
		self.ensure_active()?;
		self.range_reads.push(range.clone());

		let inner = self.store.inner.read();
		let mut committed = inner.data.range(range.clone()).peekable();
		let mut pending = self.pending.range(range).peekable();

		let mut result = Vec::new();
		while result.len() < limit {
			let order = match (committed.peek(), pending.peek()) {
				(None, None) => break,
				(Some(_), None) => Ordering::Less,
				(None, Some(_)) => Ordering::Greater,
				(Some((committed_key, _)), Some((pending_key, _))) => committed_key.cmp(pending_key),
			};

			match order {
				Ordering::Less => {
					if let Some((key, value)) = committed.next() {
						result.push((key.clone(), value.clone()));
					}
				}
				Ordering::Equal | Ordering::Greater => {
					// pending writes shadow the committed entry of the same key
					if order == Ordering::Equal {
						committed.next();
					}
					if let Some((key, Some(value))) = pending.next() {
						result.push((key.clone(), value.clone()));
					}
				}
			}
		}

		Ok(result)
	}

	#[instrument(name = "transaction::memory::commit", level = "trace", skip(self), fields(version = %self.version))]
	fn commit(&mut self) -> Result<CommitVersion> {
		self.ensure_active()?;
		self.discarded = true;

		let mut inner = self.store.inner.write();
		inner.release(self.version);

		if self.pending.is_empty() {
			return Ok(self.version);
		}

		if self.has_conflict(&inner) {
			trace!("commit rejected, read set changed");
			self.pending.clear();
			return Err(TransactionError::Conflict);
		}

		let version = CommitVersion(inner.version.0 + 1);
		inner.version = version;

		for (key, value) in std::mem::take(&mut self.pending) {
			match value {
				Some(value) => {
					inner.data.insert(key.clone(), value);
				}
				None => {
					inner.data.remove(&key);
				}
			}
			inner.modified.insert(key, version);
		}
		inner.prune();

		trace!(%version, "committed");
		Ok(version)
	}

	fn rollback(&mut self) -> Result<()> {
		self.ensure_active()?;
		self.discarded = true;
		self.pending.clear();
		self.store.inner.write().release(self.version);
		Ok(())
	}
}

impl Drop for MemoryTransaction {
	fn drop(&mut self) {
		if !self.discarded {
			self.store.inner.write().release(self.version);
		}
	}
}
