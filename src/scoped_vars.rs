/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`ScopedVars`], the variables a [`Transformation`](`crate::Transformation`) produces,
//! ready to be interpolated into data link URLs and labels as `${name}`

use indexmap::{IndexMap, map};
use serde::{Deserialize, Serialize};

use crate::extracted::ExtractedValues;

/// A single variable
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ScopedVar {
	/// The text `${name}` gets replaced with
	pub value: String,
}

/// Variables keyed by their name, in the order they were extracted in.
///
/// Serializes to `{ "name": { "value": "..." } }`
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(transparent)]
pub struct ScopedVars(IndexMap<String, ScopedVar>);

impl ScopedVars {
	/// Creates an empty [`ScopedVars`]
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Normalize `extracted` values into variables, keeping their order.
	///
	/// See [`ExtractedValue::into_string`](`crate::ExtractedValue::into_string`) for how non-string values are rendered
	#[must_use]
	pub fn from_extracted(extracted: ExtractedValues) -> Self {
		extracted
			.into_iter()
			.map(|(name, value)| (name, ScopedVar::new(value.into_string())))
			.collect()
	}

	/// Get the variable called `name`
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&ScopedVar> {
		self.0.get(name)
	}

	/// Get the value of the variable called `name`
	#[must_use]
	pub fn value(&self, name: &str) -> Option<&str> {
		self.get(name).map(|var| var.value.as_str())
	}

	/// Number of variables
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there are no variables
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over all variables in order
	pub fn iter(&self) -> map::Iter<'_, String, ScopedVar> {
		self.0.iter()
	}

	/// Iterate over all variable names in order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Add all variables of `other`, replacing the values of the ones that already exist.
	///
	/// Useful when several transformations are applied to the same data row
	pub fn merge(&mut self, other: ScopedVars) {
		self.extend(other);
	}

	/// Get the underlying map
	#[must_use]
	pub fn into_inner(self) -> IndexMap<String, ScopedVar> {
		self.0
	}
}

impl ScopedVar {
	/// Creates a new [`ScopedVar`] with the provided `value`
	#[must_use]
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}
}

impl FromIterator<(String, ScopedVar)> for ScopedVars {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (String, ScopedVar)>,
	{
		Self(iter.into_iter().collect())
	}
}

impl Extend<(String, ScopedVar)> for ScopedVars {
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (String, ScopedVar)>,
	{
		self.0.extend(iter);
	}
}

impl IntoIterator for ScopedVars {
	type Item = (String, ScopedVar);
	type IntoIter = map::IntoIter<String, ScopedVar>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a ScopedVars {
	type Item = (&'a String, &'a ScopedVar);
	type IntoIter = map::Iter<'a, String, ScopedVar>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<ScopedVars> for IndexMap<String, ScopedVar> {
	fn from(vars: ScopedVars) -> Self {
		vars.into_inner()
	}
}
