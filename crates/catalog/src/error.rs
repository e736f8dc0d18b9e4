// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{SchemaId, TableId};
use strata_transaction::TransactionError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("schema {schema} does not exist")]
	SchemaNotFound {
		schema: SchemaId,
	},

	#[error("schema {schema} already exists")]
	SchemaAlreadyExists {
		schema: SchemaId,
	},

	#[error("table {table} does not exist in schema {schema}")]
	TableNotFound {
		schema: SchemaId,
		table: TableId,
	},

	#[error("table {table} already exists in schema {schema}")]
	TableAlreadyExists {
		schema: SchemaId,
		table: TableId,
	},

	#[error("row id sequence of table {table} in schema {schema} is exhausted")]
	SequenceExhausted {
		schema: SchemaId,
		table: TableId,
	},

	#[error("failed to encode {what}")]
	Encode {
		what: &'static str,
		#[source]
		source: postcard::Error,
	},

	#[error("failed to decode {what}")]
	Decode {
		what: &'static str,
		#[source]
		source: postcard::Error,
	},

	#[error(transparent)]
	Transaction(#[from] TransactionError),
}
