// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	JobId, SchemaId, SchemaVersion, TableId,
	interface::{HistoryEntry, TableDef, Visibility},
	key::HistoryKey,
};
use strata_transaction::Transaction;
use tracing::instrument;

use crate::{
	CatalogStore, Result,
	codec::{decode, encode},
};

impl CatalogStore {
	#[instrument(name = "catalog::history::append", level = "debug", skip(txn, entry), fields(version = %entry.version, job = %entry.job))]
	pub fn append_history(txn: &mut impl Transaction, entry: &HistoryEntry) -> Result<()> {
		txn.set(&HistoryKey::encoded(entry.version), encode("history entry", entry)?)?;
		Ok(())
	}

	pub fn get_history(txn: &mut impl Transaction, version: SchemaVersion) -> Result<Option<HistoryEntry>> {
		txn.get(&HistoryKey::encoded(version))?.map(|bytes| decode("history entry", &bytes)).transpose()
	}

	/// Entries committed after `version`, oldest first. A reader holding a catalog at `version`
	/// is stale if this is not empty.
	pub fn history_since(txn: &mut impl Transaction, version: SchemaVersion) -> Result<Vec<HistoryEntry>> {
		txn.range(HistoryKey::after(version), usize::MAX)?
			.into_iter()
			.map(|(_, bytes)| decode("history entry", &bytes))
			.collect()
	}

	/// Latest entry appended by `job`, `None` if none of its steps committed a change.
	pub fn job_history(txn: &mut impl Transaction, job: JobId) -> Result<Option<HistoryEntry>> {
		let mut result = None;

		for (_, bytes) in txn.range(HistoryKey::full_scan(), usize::MAX)? {
			let entry: HistoryEntry = decode("history entry", &bytes)?;
			if entry.job == job {
				result = Some(entry);
			}
		}

		Ok(result)
	}

	/// The table as a reader at `version` observes it, reconstructed from history.
	pub fn table_as_of(
		txn: &mut impl Transaction,
		schema: SchemaId,
		table: TableId,
		version: SchemaVersion,
	) -> Result<Option<TableDef>> {
		let mut result = None;

		for (_, bytes) in txn.range(HistoryKey::up_to(version), usize::MAX)? {
			let entry: HistoryEntry = decode("history entry", &bytes)?;
			if entry.schema != schema {
				continue;
			}

			if entry.table.id == table {
				result = (entry.table.state == Visibility::Public).then_some(entry.table);
			} else if entry.replaced == Some(table) {
				result = None;
			}
		}

		Ok(result)
	}
}
