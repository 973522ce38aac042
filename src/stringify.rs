/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`safe_stringify`], a conversion of any serializable value to text that never fails

use serde::Serialize;
use serde_json::Value;

/// What [`safe_stringify`] returns when the value couldn't be serialized
pub const FALLBACK: &str = "";

/// Render `value` as text.
///
/// Nulls (and everything that serializes to one, e.g. [`None`] or `()`) become an empty string,
/// everything else is rendered as compact JSON. Objects are rendered with their keys sorted.
/// If `value` can't be serialized at all, [`FALLBACK`] is returned and the error is logged
#[must_use]
pub fn safe_stringify<T>(value: &T) -> String
where
	T: Serialize + ?Sized,
{
	match serde_json::to_value(value) {
		Ok(Value::Null) => String::new(),
		Ok(json) => json.to_string(),
		Err(e) => {
			tracing::error!("Unable to stringify value: {e}");
			FALLBACK.to_owned()
		}
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::missing_assert_message)]

	use std::collections::{BTreeMap, HashMap};

	use super::*;

	#[test]
	fn primitives() {
		assert_eq!(safe_stringify(&true), "true");
		assert_eq!(safe_stringify(&false), "false");
		assert_eq!(safe_stringify(&42), "42");
		assert_eq!(safe_stringify(&1.5), "1.5");
	}

	#[test]
	fn nulls_are_empty() {
		assert_eq!(safe_stringify(&()), "");
		assert_eq!(safe_stringify(&None::<bool>), "");
	}

	#[test]
	fn structured_values_are_deterministic() {
		let map = BTreeMap::from([("b", vec![1, 2]), ("a", vec![])]);
		assert_eq!(safe_stringify(&map), r#"{"a":[],"b":[1,2]}"#);
		assert_eq!(safe_stringify(&map), safe_stringify(&map));
	}

	#[test]
	fn unserializable_falls_back() {
		// JSON object keys have to be strings
		let map = HashMap::from([((1, 2), 3)]);
		assert_eq!(safe_stringify(&map), FALLBACK);
	}
}
