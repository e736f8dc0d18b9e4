// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::CatalogStore;
use strata_core::{
	TableId,
	interface::{Job, Visibility},
};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, instrument};

use crate::{
	Ddl, DdlError, JobOutcome, Result,
	table::{decode_args, record_history},
};

impl<S: TransactionStore> Ddl<S> {
	/// Rebinds a public table to the fresh id carried by the job.
	///
	/// Removing the old descriptor and inserting it under the new id happen in the same
	/// transaction, so the table is never absent from the catalog. Records keyed by the old id
	/// become unreachable and are left for a reclaim job.
	#[instrument(name = "ddl::table::truncate", level = "debug", skip(self, txn, job), fields(job = %job.id, table = %job.table))]
	pub fn on_truncate_table(&self, txn: &mut impl Transaction, job: &Job) -> Result<JobOutcome> {
		let new_id: TableId = decode_args(job)?;

		let mut table = match self.get_table_info(txn, job) {
			Ok(table) => table,
			Err(err @ DdlError::TableNotFound {
				..
			}) => {
				// only this job's own committed rebinding counts as done
				let committed = CatalogStore::job_history(txn, job.id)?
					.is_some_and(|entry| entry.replaced == Some(job.table) && entry.table.id == new_id);
				if !committed {
					return Err(err);
				}

				debug!(%new_id, "table already truncated");
				return Ok(JobOutcome::done(Visibility::Public).with_reclaim(job.table));
			}
			Err(err) => return Err(err),
		};

		if CatalogStore::get_table(txn, job.schema, new_id)?.is_some() {
			return Err(DdlError::TableExists {
				schema: job.schema,
				name: table.name,
			});
		}

		let old_id = table.id;
		CatalogStore::drop_table(txn, job.schema, old_id)?;

		table.id = new_id;
		CatalogStore::create_table(txn, job.schema, &table)?;

		let version = CatalogStore::next_schema_version(txn)?;
		record_history(txn, job, version, &table, Some(old_id))?;

		debug!(%old_id, %new_id, %version, "table truncated");
		Ok(JobOutcome::done(Visibility::Public).with_version(version).with_reclaim(old_id))
	}
}

#[cfg(test)]
mod tests {
	use strata_catalog::{CatalogStore, test_utils::create_table};
	use strata_core::{
		SchemaId, SchemaVersion, TableId,
		interface::{JobState, Visibility},
	};
	use strata_transaction::{Transaction, TransactionStore};

	use crate::{
		DdlError,
		test_utils::{get_table, history, schema_version, test_ddl, truncate_table_job},
	};

	fn ddl_with_table(state: Visibility) -> crate::Ddl<strata_transaction::MemoryStore> {
		let ddl = test_ddl(1);
		let mut txn = ddl.store().begin();
		create_table(&mut txn, SchemaId(1), 10, "t", state);
		txn.commit().unwrap();
		ddl
	}

	#[test]
	fn test_truncate() {
		let ddl = ddl_with_table(Visibility::Public);
		let original = get_table(&ddl, 1, 10).unwrap();

		let outcome = ddl.step(&truncate_table_job(1, 1, 10, 20));
		assert!(outcome.error.is_none());
		assert_eq!(outcome.state, JobState::Done);
		assert_eq!(outcome.schema_state, Visibility::Public);
		assert_eq!(outcome.reclaim, Some(TableId(10)));

		assert_eq!(get_table(&ddl, 1, 10), None);
		let table = get_table(&ddl, 1, 20).unwrap();
		assert_eq!(table.name, original.name);
		assert_eq!(table.columns, original.columns);
		assert_eq!(table.indexes, original.indexes);
		assert_eq!(table.state, Visibility::Public);
		assert_eq!(schema_version(&ddl), SchemaVersion(1));

		let history = history(&ddl);
		assert_eq!(history.len(), 1);
		assert_eq!(history[0].replaced, Some(TableId(10)));
		assert_eq!(history[0].table.id, TableId(20));
	}

	#[test]
	fn test_rerun_after_commit() {
		let ddl = ddl_with_table(Visibility::Public);
		let job = truncate_table_job(1, 1, 10, 20);
		assert_eq!(ddl.step(&job).state, JobState::Done);

		let outcome = ddl.step(&job);
		assert!(outcome.error.is_none());
		assert_eq!(outcome.state, JobState::Done);
		assert_eq!(outcome.version, None);
		assert_eq!(schema_version(&ddl), SchemaVersion(1));
		assert_eq!(history(&ddl).len(), 1);
	}

	#[test]
	fn test_missing_table_with_new_id_taken() {
		let ddl = test_ddl(1);
		let mut txn = ddl.store().begin();
		create_table(&mut txn, SchemaId(1), 20, "other", Visibility::Public);
		txn.commit().unwrap();

		let outcome = ddl.step(&truncate_table_job(1, 1, 10, 20));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableNotFound { table, .. }) if table == 10));
		assert_eq!(outcome.reclaim, None);
		assert_eq!(get_table(&ddl, 1, 20).unwrap().name, "other");
		assert_eq!(schema_version(&ddl), SchemaVersion(0));
	}

	#[test]
	fn test_rerun_of_other_job_is_not_done() {
		let ddl = ddl_with_table(Visibility::Public);
		assert_eq!(ddl.step(&truncate_table_job(1, 1, 10, 20)).state, JobState::Done);

		let outcome = ddl.step(&truncate_table_job(2, 1, 10, 20));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableNotFound { .. })));
	}

	#[test]
	fn test_missing_table() {
		let ddl = test_ddl(1);

		let outcome = ddl.step(&truncate_table_job(1, 1, 10, 20));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableNotFound { .. })));
	}

	#[test]
	fn test_table_not_public() {
		let ddl = ddl_with_table(Visibility::WriteOnly);

		let outcome = ddl.step(&truncate_table_job(1, 1, 10, 20));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(
			outcome.error,
			Some(DdlError::TableNotPublic {
				state: Visibility::WriteOnly,
				..
			})
		));
		assert_eq!(get_table(&ddl, 1, 10).unwrap().state, Visibility::WriteOnly);
		assert_eq!(get_table(&ddl, 1, 20), None);
	}

	#[test]
	fn test_new_id_taken() {
		let ddl = ddl_with_table(Visibility::Public);
		let mut txn = ddl.store().begin();
		create_table(&mut txn, SchemaId(1), 20, "other", Visibility::Public);
		txn.commit().unwrap();

		let outcome = ddl.step(&truncate_table_job(1, 1, 10, 20));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableExists { .. })));
		assert_eq!(get_table(&ddl, 1, 20).unwrap().name, "other");
		assert_eq!(CatalogStore::list_tables(&mut ddl.store().begin(), SchemaId(1)).unwrap().len(), 2);
	}

	#[test]
	fn test_malformed_arguments() {
		let ddl = ddl_with_table(Visibility::Public);
		let mut job = truncate_table_job(1, 1, 10, 20);
		job.args.clear();

		let outcome = ddl.step(&job);
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::InvalidArguments { .. })));
		assert_eq!(get_table(&ddl, 1, 10).unwrap().state, Visibility::Public);
	}
}
