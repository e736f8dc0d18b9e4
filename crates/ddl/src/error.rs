// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::CatalogError;
use strata_core::{
	JobId, SchemaId, TableId,
	interface::{JobKind, Visibility},
};
use strata_transaction::TransactionError;

/// How the scheduler has to treat a failed step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorClass {
	/// The job can never succeed. It is marked cancelled and not retried.
	Cancel,
	/// The store rejected the step. The job keeps its persisted state and is retried.
	Retry,
	/// Persisted state contradicts the lifecycle. Surfaced and not retried.
	Fatal,
}

#[derive(Debug, thiserror::Error)]
pub enum DdlError {
	#[error("schema {schema} does not exist")]
	SchemaNotFound {
		schema: SchemaId,
	},

	#[error("table `{name}` already exists in schema {schema}")]
	TableExists {
		schema: SchemaId,
		name: String,
	},

	#[error("table {table} does not exist in schema {schema}")]
	TableNotFound {
		schema: SchemaId,
		table: TableId,
	},

	#[error("table `{name}` is {state}, not public")]
	TableNotPublic {
		name: String,
		state: Visibility,
	},

	#[error("{kind} job observed table in invalid state {state}")]
	InvalidTableState {
		kind: JobKind,
		state: Visibility,
	},

	#[error("malformed arguments of {kind} job {job}")]
	InvalidArguments {
		job: JobId,
		kind: JobKind,
		#[source]
		source: postcard::Error,
	},

	#[error("invalid definition of table `{table}`: {reason}")]
	InvalidTableDef {
		table: String,
		reason: String,
	},

	#[error(transparent)]
	Catalog(CatalogError),
}

impl DdlError {
	pub fn code(&self) -> &'static str {
		match self {
			DdlError::SchemaNotFound {
				..
			} => "DDL_001",
			DdlError::TableExists {
				..
			} => "DDL_002",
			DdlError::TableNotFound {
				..
			} => "DDL_003",
			DdlError::TableNotPublic {
				..
			} => "DDL_004",
			DdlError::InvalidTableState {
				..
			} => "DDL_005",
			DdlError::InvalidArguments {
				..
			} => "DDL_006",
			DdlError::InvalidTableDef {
				..
			} => "DDL_007",
			DdlError::Catalog(_) => "DDL_008",
		}
	}

	pub fn class(&self) -> ErrorClass {
		match self {
			DdlError::SchemaNotFound {
				..
			}
			| DdlError::TableExists {
				..
			}
			| DdlError::TableNotFound {
				..
			}
			| DdlError::TableNotPublic {
				..
			}
			| DdlError::InvalidArguments {
				..
			} => ErrorClass::Cancel,

			DdlError::InvalidTableState {
				..
			}
			| DdlError::InvalidTableDef {
				..
			} => ErrorClass::Fatal,

			DdlError::Catalog(CatalogError::Transaction(err)) if err.is_retryable() => ErrorClass::Retry,
			DdlError::Catalog(CatalogError::SequenceExhausted {
				..
			}) => ErrorClass::Cancel,
			DdlError::Catalog(_) => ErrorClass::Fatal,
		}
	}
}

impl From<CatalogError> for DdlError {
	fn from(err: CatalogError) -> Self {
		match err {
			CatalogError::SchemaNotFound {
				schema,
			} => DdlError::SchemaNotFound {
				schema,
			},
			CatalogError::TableNotFound {
				schema,
				table,
			} => DdlError::TableNotFound {
				schema,
				table,
			},
			err => DdlError::Catalog(err),
		}
	}
}

impl From<TransactionError> for DdlError {
	fn from(err: TransactionError) -> Self {
		DdlError::Catalog(CatalogError::Transaction(err))
	}
}
