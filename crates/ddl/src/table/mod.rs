// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::de::DeserializeOwned;
use strata_catalog::CatalogStore;
use strata_core::{
	SchemaVersion, TableId,
	interface::{HistoryEntry, Job, TableDef},
};
use strata_transaction::Transaction;

use crate::{DdlError, Result};

mod create;
mod drop;
mod truncate;

pub(crate) fn decode_args<T: DeserializeOwned>(job: &Job) -> Result<T> {
	job.decode_args().map_err(|source| DdlError::InvalidArguments {
		job: job.id,
		kind: job.kind,
		source,
	})
}

/// Appends the history entry of a committed step under the version it bumped.
pub(crate) fn record_history(
	txn: &mut impl Transaction,
	job: &Job,
	version: SchemaVersion,
	table: &TableDef,
	replaced: Option<TableId>,
) -> Result<()> {
	CatalogStore::append_history(
		txn,
		&HistoryEntry {
			version,
			job: job.id,
			kind: job.kind,
			schema: job.schema,
			table: table.clone(),
			replaced,
		},
	)?;
	Ok(())
}
