// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::CatalogStore;
use strata_core::interface::{Job, Visibility};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, instrument};

use crate::{Ddl, DdlError, JobOutcome, Result, table::record_history};

impl<S: TransactionStore> Ddl<S> {
	/// Moves the table one phase along `Public -> WriteOnly -> DeleteOnly -> removed`.
	///
	/// Each committed phase bumps the schema version and appends a history entry holding the
	/// descriptor in its new state, so readers at an older version notice the change and
	/// snapshot lookups stop seeing the table once it leaves public. Records of the table are
	/// left in place for a reclaim job.
	#[instrument(name = "ddl::table::drop", level = "debug", skip(self, txn, job), fields(job = %job.id, table = %job.table))]
	pub fn on_drop_table(&self, txn: &mut impl Transaction, job: &Job) -> Result<JobOutcome> {
		let Some(mut table) = CatalogStore::get_table(txn, job.schema, job.table)? else {
			// removal committed but the outcome never reached the scheduler
			if job.schema_state == Visibility::DeleteOnly {
				debug!("table already removed");
				return Ok(JobOutcome::done(Visibility::None).with_reclaim(job.table));
			}
			return Err(DdlError::TableNotFound {
				schema: job.schema,
				table: job.table,
			});
		};

		match table.state {
			Visibility::Public => {
				let version = CatalogStore::next_schema_version(txn)?;
				table.state = Visibility::WriteOnly;
				CatalogStore::update_table(txn, job.schema, &table)?;
				record_history(txn, job, version, &table, None)?;

				debug!(%version, "public -> write only");
				Ok(JobOutcome::running(Visibility::WriteOnly).with_version(version))
			}
			Visibility::WriteOnly => {
				let version = CatalogStore::next_schema_version(txn)?;
				table.state = Visibility::DeleteOnly;
				CatalogStore::update_table(txn, job.schema, &table)?;
				record_history(txn, job, version, &table, None)?;

				debug!(%version, "write only -> delete only");
				Ok(JobOutcome::running(Visibility::DeleteOnly).with_version(version))
			}
			Visibility::DeleteOnly => {
				let version = CatalogStore::next_schema_version(txn)?;
				table.state = Visibility::None;
				CatalogStore::drop_table(txn, job.schema, table.id)?;
				record_history(txn, job, version, &table, None)?;

				debug!(%version, "table removed");
				Ok(JobOutcome::done(Visibility::None).with_version(version).with_reclaim(table.id))
			}
			state => Err(DdlError::InvalidTableState {
				kind: job.kind,
				state,
			}),
		}
	}
}
