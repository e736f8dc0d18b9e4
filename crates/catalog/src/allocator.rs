// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use parking_lot::Mutex;
use strata_core::{SchemaId, TableId, key::AutoIncrementKey};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, instrument};

use crate::{
	CatalogError, Result,
	codec::{decode, encode},
};

/// Hands out row ids for the tables of one schema.
///
/// Ids are reserved from the persisted high-water mark in batches of `step`, each batch in its
/// own transaction, and served from memory until the batch runs out. Ids lost with an unused
/// batch are never handed out again.
pub struct Allocator<S: TransactionStore> {
	store: S,
	schema: SchemaId,
	step: u64,
	/// next id to hand out and last reserved id, both inclusive
	reserved: Mutex<HashMap<TableId, (u64, u64)>>,
}

impl<S: TransactionStore> Allocator<S> {
	pub fn new(store: S, schema: SchemaId, step: u64) -> Self {
		Self {
			store,
			schema,
			step: step.max(1),
			reserved: Mutex::new(HashMap::new()),
		}
	}

	pub fn schema(&self) -> SchemaId {
		self.schema
	}

	#[instrument(name = "catalog::allocator::alloc", level = "trace", skip(self), fields(schema = %self.schema))]
	pub fn alloc(&self, table: TableId) -> Result<u64> {
		let mut reserved = self.reserved.lock();

		if let Some((next, end)) = reserved.get(&table).copied() {
			if next < end {
				reserved.insert(table, (next + 1, end));
				return Ok(next);
			}
			reserved.remove(&table);
			if next == end {
				return Ok(next);
			}
		}

		let mut txn = self.store.begin();
		let (first, end) = reserve(&mut txn, self.schema, table, self.step)?;
		txn.commit()?;
		debug!(%table, first, end, "reserved row ids");

		if first < end {
			reserved.insert(table, (first + 1, end));
		}
		Ok(first)
	}

	/// Persisted high-water mark of `table`, zero if nothing was reserved yet.
	pub fn base(&self, table: TableId) -> Result<u64> {
		let mut txn = self.store.begin();
		current(&mut txn, self.schema, table)
	}
}

fn current(txn: &mut impl Transaction, schema: SchemaId, table: TableId) -> Result<u64> {
	match txn.get(&AutoIncrementKey::encoded(schema, table))? {
		Some(bytes) => decode("auto increment", &bytes),
		None => Ok(0),
	}
}

/// Advances the high-water mark by `step` and returns the reserved ids as an inclusive range.
fn reserve(txn: &mut impl Transaction, schema: SchemaId, table: TableId, step: u64) -> Result<(u64, u64)> {
	let current = current(txn, schema, table)?;
	let end = current.saturating_add(step);

	if end == current {
		return Err(CatalogError::SequenceExhausted {
			schema,
			table,
		});
	}

	txn.set(&AutoIncrementKey::encoded(schema, table), encode("auto increment", &end)?)?;
	Ok((current + 1, end))
}

#[cfg(test)]
mod tests {
	use strata_core::{SchemaId, TableId, key::AutoIncrementKey};
	use strata_transaction::{MemoryStore, Transaction, TransactionStore};

	use super::Allocator;
	use crate::{CatalogError, codec::encode};

	#[test]
	fn test_sequential() {
		let store = MemoryStore::new();
		let allocator = Allocator::new(store, SchemaId(1), 10);

		for expected in 1..=25 {
			assert_eq!(allocator.alloc(TableId(1)).unwrap(), expected);
		}
		assert_eq!(allocator.base(TableId(1)).unwrap(), 30);
	}

	#[test]
	fn test_tables_are_independent() {
		let store = MemoryStore::new();
		let allocator = Allocator::new(store, SchemaId(1), 100);

		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 1);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 2);
		assert_eq!(allocator.alloc(TableId(2)).unwrap(), 1);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 3);
	}

	#[test]
	fn test_restart_continues_after_reserved_batch() {
		let store = MemoryStore::new();

		let allocator = Allocator::new(store.clone(), SchemaId(1), 10);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 1);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 2);
		drop(allocator);

		let allocator = Allocator::new(store, SchemaId(1), 10);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 11);
	}

	#[test]
	fn test_step_of_one() {
		let store = MemoryStore::new();
		let allocator = Allocator::new(store, SchemaId(1), 0);

		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 1);
		assert_eq!(allocator.alloc(TableId(1)).unwrap(), 2);
		assert_eq!(allocator.base(TableId(1)).unwrap(), 2);
	}

	#[test]
	fn test_exhaustion() {
		let store = MemoryStore::new();

		let mut txn = store.begin();
		txn.set(&AutoIncrementKey::encoded(SchemaId(1), TableId(1)), encode("auto increment", &u64::MAX).unwrap())
			.unwrap();
		txn.commit().unwrap();

		let allocator = Allocator::new(store, SchemaId(1), 10);
		let err = allocator.alloc(TableId(1)).unwrap_err();
		assert!(matches!(err, CatalogError::SequenceExhausted { table, .. } if table == 1));
	}
}
