// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::interface::{Job, JobKind};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, error, instrument, trace, warn};

use crate::{Ddl, DdlError, ErrorClass, JobOutcome, Result};

impl<S: TransactionStore> Ddl<S> {
	/// Advances `job` by one step inside one transaction.
	///
	/// The transaction commits only if the handler succeeded. On any failure it is rolled back
	/// and the returned outcome carries the error together with the job's persisted state, or
	/// `Cancelled` when the error can never go away.
	#[instrument(name = "ddl::job::step", level = "debug", skip(self, job), fields(job = %job.id, kind = %job.kind, table = %job.table))]
	pub fn step(&self, job: &Job) -> JobOutcome {
		if job.state.is_finished() {
			trace!(state = %job.state, "job already finished");
			return JobOutcome::unchanged(job);
		}

		let mut txn = self.store.begin();
		match self.dispatch(&mut txn, job) {
			Ok(outcome) => match txn.commit() {
				Ok(_) => {
					debug!(state = %outcome.state, schema_state = %outcome.schema_state, "step committed");
					outcome
				}
				Err(err) => failed(job, err.into()),
			},
			Err(err) => {
				if let Err(rollback) = txn.rollback() {
					warn!(%rollback, "rollback after failed step");
				}
				failed(job, err)
			}
		}
	}

	/// Runs the handler for the job's kind without committing.
	pub fn dispatch(&self, txn: &mut impl Transaction, job: &Job) -> Result<JobOutcome> {
		match job.kind {
			JobKind::CreateTable => self.on_create_table(txn, job),
			JobKind::DropTable => self.on_drop_table(txn, job),
			JobKind::TruncateTable => self.on_truncate_table(txn, job),
			JobKind::ReclaimTable => self.on_reclaim_table(txn, job),
		}
	}
}

fn failed(job: &Job, err: DdlError) -> JobOutcome {
	match err.class() {
		ErrorClass::Cancel => warn!(code = err.code(), %err, "job cancelled"),
		ErrorClass::Retry => debug!(code = err.code(), %err, "step rejected, will retry"),
		ErrorClass::Fatal => error!(code = err.code(), %err, "invariant violated"),
	}
	JobOutcome::failed(job, err)
}
