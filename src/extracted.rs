/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`ExtractedValue`] and [`ExtractedValues`], the raw output of an extraction strategy
//! before it gets normalized into [`ScopedVars`](`crate::ScopedVars`)

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::stringify::safe_stringify;

/// Extracted values keyed by variable name, in the order the names were first extracted
pub type ExtractedValues = IndexMap<String, ExtractedValue>;

/// A single value extracted from a field
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExtractedValue {
	/// Plain text
	String(String),

	/// A flag, e.g. a bare logfmt key
	Bool(bool),

	/// An explicitly empty value
	Null,

	/// A value that has a name but wasn't found, e.g. a named capture group that didn't take part in the match
	Undefined,
}

impl ExtractedValue {
	/// Turn the value into text. Strings are kept verbatim, everything else goes through [`safe_stringify`]
	#[must_use]
	pub fn into_string(self) -> String {
		match self {
			Self::String(s) => s,
			other @ (Self::Bool(_) | Self::Null | Self::Undefined) => safe_stringify(&other),
		}
	}
}

impl Serialize for ExtractedValue {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::String(s) => serializer.serialize_str(s),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::Null | Self::Undefined => serializer.serialize_unit(),
		}
	}
}

impl From<String> for ExtractedValue {
	fn from(s: String) -> Self {
		Self::String(s)
	}
}

impl From<&str> for ExtractedValue {
	fn from(s: &str) -> Self {
		Self::String(s.to_owned())
	}
}

impl From<bool> for ExtractedValue {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}
