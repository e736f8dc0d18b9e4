// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::CatalogStore;
use strata_core::{
	interface::{Job, Visibility},
	key::RowKey,
};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, instrument, trace};

use crate::{Ddl, DdlError, JobOutcome, Result};

impl<S: TransactionStore> Ddl<S> {
	/// Deletes at most one batch of records keyed by a table id that no descriptor owns anymore.
	///
	/// A full batch means more records may remain and the job keeps running. A short batch,
	/// including an empty one, finishes it.
	#[instrument(name = "ddl::table::reclaim", level = "debug", skip(self, txn, job), fields(job = %job.id, table = %job.table))]
	pub fn on_reclaim_table(&self, txn: &mut impl Transaction, job: &Job) -> Result<JobOutcome> {
		if let Some(table) = CatalogStore::get_table(txn, job.schema, job.table)? {
			return Err(DdlError::InvalidTableState {
				kind: job.kind,
				state: table.state,
			});
		}

		let limit = self.config.reclaim_limit();
		let deleted = txn.delete_prefix(&RowKey::table_prefix(job.table), limit)?;
		trace!(deleted, limit, "reclaimed batch");

		if deleted < limit {
			debug!("table reclaimed");
			return Ok(JobOutcome::done(Visibility::None));
		}
		Ok(JobOutcome::running(job.schema_state))
	}
}
