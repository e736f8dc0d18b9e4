// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_catalog::{CatalogError, CatalogStore};
use strata_core::interface::{Job, TableDef, Visibility};
use strata_transaction::{Transaction, TransactionStore};
use tracing::{debug, instrument};

use crate::{
	Ddl, DdlError, JobOutcome, Result,
	table::{decode_args, record_history},
};

impl<S: TransactionStore> Ddl<S> {
	/// Makes the table carried by the job public in a single step.
	///
	/// A table of the same name and id is this job's own earlier run: if it is already public
	/// the job is done without touching the ledger again.
	#[instrument(name = "ddl::table::create", level = "debug", skip(self, txn, job), fields(job = %job.id, schema = %job.schema))]
	pub fn on_create_table(&self, txn: &mut impl Transaction, job: &Job) -> Result<JobOutcome> {
		let mut table: TableDef = decode_args(job)?;

		let name = table.normalized_name();
		let existing = CatalogStore::list_tables(txn, job.schema)?.into_iter().find(|t| t.normalized_name() == name);

		let resumed = match existing {
			Some(existing) if existing.id != table.id => {
				return Err(DdlError::TableExists {
					schema: job.schema,
					name: table.name,
				});
			}
			Some(existing) => {
				table = existing;
				true
			}
			None => false,
		};

		match table.state {
			Visibility::Public if resumed => {
				debug!(table = %table.id, "table already public");
				return Ok(JobOutcome::done(Visibility::Public));
			}
			Visibility::None => {}
			state => {
				return Err(DdlError::InvalidTableState {
					kind: job.kind,
					state,
				});
			}
		}

		let version = CatalogStore::next_schema_version(txn)?;
		table.state = Visibility::Public;

		if resumed {
			CatalogStore::update_table(txn, job.schema, &table)?;
		} else {
			CatalogStore::create_table(txn, job.schema, &table).map_err(|err| match err {
				CatalogError::TableAlreadyExists {
					schema,
					..
				} => DdlError::TableExists {
					schema,
					name: table.name.clone(),
				},
				err => err.into(),
			})?;
		}

		record_history(txn, job, version, &table, None)?;

		debug!(table = %table.id, name = %table.name, %version, "table created");
		Ok(JobOutcome::done(Visibility::Public).with_version(version))
	}
}

#[cfg(test)]
mod tests {
	use strata_catalog::{
		CatalogStore,
		test_utils::{create_table, table_def},
	};
	use strata_core::{
		SchemaId, SchemaVersion,
		interface::{JobState, Visibility},
	};
	use strata_transaction::{Transaction, TransactionStore};

	use crate::{
		DdlError,
		test_utils::{create_table_job, get_table, history, schema_version, test_ddl},
	};

	#[test]
	fn test_create_table() {
		let ddl = test_ddl(1);
		let job = create_table_job(1, 1, &table_def(10, "t"));

		let outcome = ddl.step(&job);
		assert!(outcome.error.is_none());
		assert_eq!(outcome.state, JobState::Done);
		assert_eq!(outcome.schema_state, Visibility::Public);
		assert_eq!(outcome.version, Some(SchemaVersion(1)));

		let table = get_table(&ddl, 1, 10).unwrap();
		assert_eq!(table.state, Visibility::Public);
		assert_eq!(table.name, "t");

		let history = history(&ddl);
		assert_eq!(history.len(), 1);
		assert_eq!(history[0].version, SchemaVersion(1));
		assert_eq!(history[0].table, table);
	}

	#[test]
	fn test_missing_schema() {
		let ddl = test_ddl(1);
		let job = create_table_job(1, 2, &table_def(10, "t"));

		let outcome = ddl.step(&job);
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::SchemaNotFound { schema }) if schema == 2));
		assert_eq!(schema_version(&ddl), SchemaVersion(0));
	}

	#[test]
	fn test_name_collision_is_case_insensitive() {
		let ddl = test_ddl(1);
		assert_eq!(ddl.step(&create_table_job(1, 1, &table_def(10, "Orders"))).state, JobState::Done);

		let outcome = ddl.step(&create_table_job(2, 1, &table_def(11, "ORDERS")));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableExists { ref name, .. }) if name == "ORDERS"));
		assert_eq!(get_table(&ddl, 1, 11), None);
		assert_eq!(schema_version(&ddl), SchemaVersion(1));
	}

	#[test]
	fn test_id_collision_with_other_name() {
		let ddl = test_ddl(1);
		assert_eq!(ddl.step(&create_table_job(1, 1, &table_def(10, "a"))).state, JobState::Done);

		let outcome = ddl.step(&create_table_job(2, 1, &table_def(10, "b")));
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::TableExists { ref name, .. }) if name == "b"));
		assert_eq!(get_table(&ddl, 1, 10).unwrap().name, "a");
	}

	#[test]
	fn test_resubmitted_job_is_done() {
		let ddl = test_ddl(1);
		let job = create_table_job(1, 1, &table_def(10, "t"));
		assert_eq!(ddl.step(&job).state, JobState::Done);

		let outcome = ddl.step(&job);
		assert!(outcome.error.is_none());
		assert_eq!(outcome.state, JobState::Done);
		assert_eq!(outcome.version, None);
		assert_eq!(schema_version(&ddl), SchemaVersion(1));
		assert_eq!(history(&ddl).len(), 1);
	}

	#[test]
	fn test_resumes_table_left_in_none() {
		let ddl = test_ddl(1);
		let mut txn = ddl.store().begin();
		create_table(&mut txn, SchemaId(1), 10, "t", Visibility::None);
		txn.commit().unwrap();

		let outcome = ddl.step(&create_table_job(1, 1, &table_def(10, "t")));
		assert_eq!(outcome.state, JobState::Done);
		assert_eq!(get_table(&ddl, 1, 10).unwrap().state, Visibility::Public);
		assert_eq!(schema_version(&ddl), SchemaVersion(1));
	}

	#[test]
	fn test_torn_down_table_is_fatal() {
		let ddl = test_ddl(1);
		let mut txn = ddl.store().begin();
		create_table(&mut txn, SchemaId(1), 10, "t", Visibility::WriteOnly);
		txn.commit().unwrap();

		let outcome = ddl.step(&create_table_job(1, 1, &table_def(10, "t")));
		assert_eq!(outcome.state, JobState::Running);
		assert!(matches!(
			outcome.error,
			Some(DdlError::InvalidTableState {
				state: Visibility::WriteOnly,
				..
			})
		));
		assert!(!outcome.should_retry());
		assert_eq!(schema_version(&ddl), SchemaVersion(0));
	}

	#[test]
	fn test_malformed_arguments() {
		let ddl = test_ddl(1);
		let mut job = create_table_job(1, 1, &table_def(10, "t"));
		job.args.truncate(3);

		let outcome = ddl.step(&job);
		assert_eq!(outcome.state, JobState::Cancelled);
		assert!(matches!(outcome.error, Some(DdlError::InvalidArguments { .. })));
		assert!(CatalogStore::list_tables(&mut ddl.store().begin(), SchemaId(1)).unwrap().is_empty());
	}
}
