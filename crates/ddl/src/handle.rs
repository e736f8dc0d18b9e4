// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use strata_catalog::{Allocator, CatalogStore};
use strata_core::{
	EncodedKey, RowId, SchemaId, TableId,
	interface::{Job, TableDef, Visibility, normalize_name},
	key::RowKey,
};
use strata_transaction::{Transaction, TransactionStore};
use tracing::instrument;

use crate::{Ddl, DdlError, Result};

/// A table as the query layer uses it: the descriptor plus a row id allocator scoped to it.
pub struct TableHandle<S: TransactionStore> {
	def: TableDef,
	allocator: Allocator<S>,
}

impl<S: TransactionStore> Ddl<S> {
	/// Builds the runtime handle of a persisted descriptor.
	pub fn get_table(&self, schema: SchemaId, def: TableDef) -> Result<TableHandle<S>> {
		validate(&def)?;

		Ok(TableHandle {
			def,
			allocator: Allocator::new(self.store.clone(), schema, self.config.allocator_step),
		})
	}

	/// Reads the descriptor the job refers to. Only public tables are handed out.
	#[instrument(name = "ddl::table::info", level = "trace", skip(self, txn, job), fields(table = %job.table))]
	pub fn get_table_info(&self, txn: &mut impl Transaction, job: &Job) -> Result<TableDef> {
		let table = CatalogStore::get_table(txn, job.schema, job.table)?.ok_or(DdlError::TableNotFound {
			schema: job.schema,
			table: job.table,
		})?;

		if table.state != Visibility::Public {
			return Err(DdlError::TableNotPublic {
				name: table.name,
				state: table.state,
			});
		}
		Ok(table)
	}
}

impl<S: TransactionStore> TableHandle<S> {
	pub fn id(&self) -> TableId {
		self.def.id
	}

	pub fn schema(&self) -> SchemaId {
		self.allocator.schema()
	}

	pub fn def(&self) -> &TableDef {
		&self.def
	}

	pub fn record_prefix(&self) -> EncodedKey {
		RowKey::table_prefix(self.def.id)
	}

	pub fn record_key(&self, row: RowId) -> EncodedKey {
		RowKey::encoded(self.def.id, row)
	}

	pub fn alloc_row_id(&self) -> Result<RowId> {
		Ok(RowId(self.allocator.alloc(self.def.id)?))
	}

	/// Stores `record` under a freshly allocated row id. Tables being torn down past
	/// write only accept no new records.
	pub fn insert(&self, txn: &mut impl Transaction, record: Vec<u8>) -> Result<RowId> {
		match self.def.state {
			Visibility::Public | Visibility::WriteOnly => {}
			state => {
				return Err(DdlError::TableNotPublic {
					name: self.def.name.clone(),
					state,
				});
			}
		}

		let row = self.alloc_row_id()?;
		txn.set(&self.record_key(row), record)?;
		Ok(row)
	}

	pub fn row_count(&self, txn: &mut impl Transaction) -> Result<usize> {
		Ok(txn.range(RowKey::full_scan(self.def.id), usize::MAX)?.len())
	}
}

fn validate(def: &TableDef) -> Result<()> {
	let invalid = |reason: String| DdlError::InvalidTableDef {
		table: def.name.clone(),
		reason,
	};

	let mut seen = HashSet::new();
	for column in &def.columns {
		if !seen.insert(normalize_name(&column.name)) {
			return Err(invalid(format!("duplicate column `{}`", column.name)));
		}
	}

	for index in &def.indexes {
		for column in &index.columns {
			if def.find_column(column).is_none() {
				return Err(invalid(format!("index `{}` references unknown column `{}`", index.name, column)));
			}
		}
	}

	Ok(())
}
