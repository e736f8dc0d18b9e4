// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Serialize, de::DeserializeOwned};

use crate::{CatalogError, Result};

pub(crate) fn encode<T: Serialize>(what: &'static str, value: &T) -> Result<Vec<u8>> {
	postcard::to_stdvec(value).map_err(|source| CatalogError::Encode {
		what,
		source,
	})
}

pub(crate) fn decode<T: DeserializeOwned>(what: &'static str, bytes: &[u8]) -> Result<T> {
	postcard::from_bytes(bytes).map_err(|source| CatalogError::Decode {
		what,
		source,
	})
}
