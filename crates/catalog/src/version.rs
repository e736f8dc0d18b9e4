// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{SchemaVersion, key::SchemaVersionKey};
use strata_transaction::Transaction;
use tracing::{instrument, trace};

use crate::{
	CatalogStore, Result,
	codec::{decode, encode},
};

impl CatalogStore {
	/// Current schema version, zero before the first structural change.
	pub fn schema_version(txn: &mut impl Transaction) -> Result<SchemaVersion> {
		match txn.get(&SchemaVersionKey::encoded())? {
			Some(bytes) => decode("schema version", &bytes),
			None => Ok(SchemaVersion(0)),
		}
	}

	/// Reads and increments the schema version inside `txn`. Two transactions bumping
	/// concurrently both read the counter, so only the first of them can commit.
	#[instrument(name = "catalog::version::next", level = "trace", skip(txn))]
	pub fn next_schema_version(txn: &mut impl Transaction) -> Result<SchemaVersion> {
		let next = Self::schema_version(txn)?.next();
		txn.set(&SchemaVersionKey::encoded(), encode("schema version", &next)?)?;
		trace!(%next, "schema version bumped");
		Ok(next)
	}
}
