// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	SchemaId, TableId,
	interface::TableDef,
	key::{AutoIncrementKey, TableKey},
};
use strata_transaction::Transaction;
use tracing::instrument;

use crate::{
	CatalogError, CatalogStore, Result,
	codec::{decode, encode},
};

impl CatalogStore {
	/// All descriptors of `schema`, in table id order, regardless of their visibility.
	pub fn list_tables(txn: &mut impl Transaction, schema: SchemaId) -> Result<Vec<TableDef>> {
		Self::ensure_schema(txn, schema)?;

		txn.range(TableKey::full_scan(schema), usize::MAX)?
			.into_iter()
			.map(|(_, bytes)| decode("table", &bytes))
			.collect()
	}

	/// `Err(SchemaNotFound)` if the schema is missing, `Ok(None)` if only the table is.
	pub fn get_table(txn: &mut impl Transaction, schema: SchemaId, table: TableId) -> Result<Option<TableDef>> {
		Self::ensure_schema(txn, schema)?;

		txn.get(&TableKey::encoded(schema, table))?.map(|bytes| decode("table", &bytes)).transpose()
	}

	#[instrument(name = "catalog::table::create", level = "debug", skip(txn, table), fields(table = %table.id, name = %table.name))]
	pub fn create_table(txn: &mut impl Transaction, schema: SchemaId, table: &TableDef) -> Result<()> {
		Self::ensure_schema(txn, schema)?;

		let key = TableKey::encoded(schema, table.id);
		if txn.contains_key(&key)? {
			return Err(CatalogError::TableAlreadyExists {
				schema,
				table: table.id,
			});
		}

		txn.set(&key, encode("table", table)?)?;
		Ok(())
	}

	#[instrument(name = "catalog::table::update", level = "debug", skip(txn, table), fields(table = %table.id, state = %table.state))]
	pub fn update_table(txn: &mut impl Transaction, schema: SchemaId, table: &TableDef) -> Result<()> {
		Self::ensure_schema(txn, schema)?;

		let key = TableKey::encoded(schema, table.id);
		if !txn.contains_key(&key)? {
			return Err(CatalogError::TableNotFound {
				schema,
				table: table.id,
			});
		}

		txn.set(&key, encode("table", table)?)?;
		Ok(())
	}

	/// Removes the descriptor together with its row id high-water mark. Records keyed by the
	/// table id are left alone.
	#[instrument(name = "catalog::table::drop", level = "debug", skip(txn))]
	pub fn drop_table(txn: &mut impl Transaction, schema: SchemaId, table: TableId) -> Result<()> {
		Self::ensure_schema(txn, schema)?;

		let key = TableKey::encoded(schema, table);
		if !txn.contains_key(&key)? {
			return Err(CatalogError::TableNotFound {
				schema,
				table,
			});
		}

		txn.remove(&key)?;
		txn.remove(&AutoIncrementKey::encoded(schema, table))?;
		Ok(())
	}
}
