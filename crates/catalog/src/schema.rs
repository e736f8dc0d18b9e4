// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{SchemaId, interface::SchemaDef, key::SchemaKey};
use strata_transaction::Transaction;
use tracing::instrument;

use crate::{
	CatalogError, CatalogStore, Result,
	codec::{decode, encode},
};

impl CatalogStore {
	#[instrument(name = "catalog::schema::create", level = "debug", skip(txn, schema), fields(schema = %schema.id))]
	pub fn create_schema(txn: &mut impl Transaction, schema: &SchemaDef) -> Result<()> {
		let key = SchemaKey::encoded(schema.id);
		if txn.contains_key(&key)? {
			return Err(CatalogError::SchemaAlreadyExists {
				schema: schema.id,
			});
		}
		txn.set(&key, encode("schema", schema)?)?;
		Ok(())
	}

	pub fn get_schema(txn: &mut impl Transaction, schema: SchemaId) -> Result<Option<SchemaDef>> {
		txn.get(&SchemaKey::encoded(schema))?.map(|bytes| decode("schema", &bytes)).transpose()
	}

	pub(crate) fn ensure_schema(txn: &mut impl Transaction, schema: SchemaId) -> Result<()> {
		if !txn.contains_key(&SchemaKey::encoded(schema))? {
			return Err(CatalogError::SchemaNotFound {
				schema,
			});
		}
		Ok(())
	}
}
