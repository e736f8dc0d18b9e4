// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	SchemaId, TableId,
	interface::{ColumnDef, ColumnType, IndexDef, SchemaDef, TableDef, Visibility},
};
use strata_transaction::Transaction;

use crate::CatalogStore;

pub fn create_schema(txn: &mut impl Transaction, id: u64, name: &str) -> SchemaDef {
	let schema = SchemaDef {
		id: SchemaId(id),
		name: name.to_string(),
	};
	CatalogStore::create_schema(txn, &schema).unwrap();
	schema
}

/// A two column table with a primary key, not yet created.
pub fn table_def(id: u64, name: &str) -> TableDef {
	TableDef {
		id: TableId(id),
		name: name.to_string(),
		columns: vec![
			ColumnDef {
				name: "id".to_string(),
				ty: ColumnType::Int8,
				nullable: false,
				auto_increment: true,
			},
			ColumnDef {
				name: "name".to_string(),
				ty: ColumnType::Utf8,
				nullable: true,
				auto_increment: false,
			},
		],
		indexes: vec![IndexDef {
			name: "pk".to_string(),
			columns: vec!["id".to_string()],
			unique: true,
			primary: true,
		}],
		state: Visibility::None,
	}
}

/// Persists `table_def(id, name)` with the given visibility.
pub fn create_table(
	txn: &mut impl Transaction,
	schema: SchemaId,
	id: u64,
	name: &str,
	state: Visibility,
) -> TableDef {
	let mut table = table_def(id, name);
	table.state = state;
	CatalogStore::create_table(txn, schema, &table).unwrap();
	table
}
