/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Transformation`], a rule describing how to extract variables from a field, and [`transform`] that applies it

use serde::{Deserialize, Serialize};

use crate::{
	error::TransformationError, extracted::ExtractedValues, logfmt, pattern,
	scoped_vars::ScopedVars,
};

/// A rule describing how variables should be extracted from a field value.
///
/// Usually comes from a data link configuration, e.g.
/// `{ "type": "regex", "expression": "user=(\\w+)" }` or `{ "type": "logfmt" }`.
/// The rule isn't validated until it's applied
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Eq, Debug)]
pub struct Transformation {
	/// Which extraction strategy to use
	#[serde(rename = "type", default)]
	pub kind: TransformationKind,

	/// The regular expression to use with [`TransformationKind::Regex`]. Ignored by everything else
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expression: Option<String>,
}

/// All available extraction strategies
#[derive(Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransformationKind {
	/// Match a case-insensitive regular expression against the field value.
	///
	/// Named capture groups become variables of the same name.
	/// Without named groups, the first capture group (or the whole match) becomes a variable named after the field
	Regex,

	/// Parse the field value as a logfmt line. Each key becomes a variable
	Logfmt,

	/// Missing or unsupported type. Never extracts anything
	#[default]
	#[serde(other)]
	Unknown,
}

impl Transformation {
	/// Creates a new [`TransformationKind::Regex`] transformation that uses regular expression `expression`
	#[must_use]
	pub fn regex(expression: impl Into<String>) -> Self {
		Self {
			kind: TransformationKind::Regex,
			expression: Some(expression.into()),
		}
	}

	/// Creates a new [`TransformationKind::Logfmt`] transformation
	#[must_use]
	pub fn logfmt() -> Self {
		Self {
			kind: TransformationKind::Logfmt,
			expression: None,
		}
	}

	/// Extract variables from `field_value` of field `field_name`.
	///
	/// The field name is used as the name of the variable if the extracted value doesn't have a name of its own.
	/// Extracting nothing isn't an error, the result is just empty in that case
	///
	/// # Errors
	/// if the transformation uses a regular expression that isn't valid
	pub fn apply(
		&self,
		field_value: &str,
		field_name: &str,
	) -> Result<ScopedVars, TransformationError> {
		let extracted = match (self.kind, self.expression.as_deref()) {
			(TransformationKind::Regex, Some(expression)) if !expression.is_empty() => {
				tracing::trace!("Extracting variables from field {field_name} with regex {expression:?}");

				let re = pattern::compile(expression)?;
				pattern::extract(&re, field_value, field_name)
			}
			(TransformationKind::Regex, _) => {
				tracing::debug!("Regex transformation has no expression, nothing to extract");
				ExtractedValues::new()
			}
			(TransformationKind::Logfmt, _) => {
				tracing::trace!("Extracting variables from field {field_name} as logfmt");
				logfmt::parse(field_value)
			}
			(TransformationKind::Unknown, _) => {
				tracing::debug!("Unsupported transformation type, nothing to extract");
				ExtractedValues::new()
			}
		};

		let vars = ScopedVars::from_extracted(extracted);
		tracing::debug!("Extracted {} variable(s) from field {field_name}", vars.len());

		Ok(vars)
	}
}

/// Extract variables from `field_value` of field `field_name` using `transformation`.
///
/// Refer to [`Transformation::apply`]
///
/// # Errors
/// if `transformation` uses a regular expression that isn't valid
pub fn transform(
	transformation: &Transformation,
	field_value: &str,
	field_name: &str,
) -> Result<ScopedVars, TransformationError> {
	transformation.apply(field_value, field_name)
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]
	#![allow(clippy::missing_assert_message)]

	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn deserialize_regex() {
		let tr: Transformation =
			serde_json::from_str(r#"{ "type": "regex", "expression": "(\\d+)" }"#).unwrap();

		assert_eq!(tr, Transformation::regex(r"(\d+)"));
	}

	#[test]
	fn deserialize_logfmt_ignores_extra_fields() {
		let tr: Transformation =
			serde_json::from_str(r#"{ "type": "logfmt", "field": "line" }"#).unwrap();

		assert_eq!(tr, Transformation::logfmt());
	}

	#[test]
	fn deserialize_unknown_or_missing_type() {
		let unknown: Transformation = serde_json::from_str(r#"{ "type": "jsonpath" }"#).unwrap();
		let missing: Transformation = serde_json::from_str(r#"{ "expression": "x" }"#).unwrap();

		assert_eq!(unknown.kind, TransformationKind::Unknown);
		assert_eq!(missing.kind, TransformationKind::Unknown);
		assert!(unknown.apply("x", "f").unwrap().is_empty());
		assert!(missing.apply("x", "f").unwrap().is_empty());
	}

	#[test]
	fn serialize() {
		assert_eq!(
			serde_json::to_string(&Transformation::logfmt()).unwrap(),
			r#"{"type":"logfmt"}"#
		);
		assert_eq!(
			serde_json::to_string(&Transformation::regex("a")).unwrap(),
			r#"{"type":"regex","expression":"a"}"#
		);
	}

	#[test]
	fn regex_without_expression() {
		let no_expression = Transformation {
			kind: TransformationKind::Regex,
			expression: None,
		};

		assert!(no_expression.apply("anything", "f").unwrap().is_empty());
		assert!(Transformation::regex("").apply("anything", "f").unwrap().is_empty());
	}

	#[test]
	fn logfmt_ignores_expression() {
		let tr = Transformation {
			kind: TransformationKind::Logfmt,
			expression: Some("(unbalanced".to_owned()),
		};

		assert_eq!(tr.apply("a=1", "f").unwrap().value("a"), Some("1"));
	}

	#[test]
	fn bad_regex() {
		assert_matches!(
			Transformation::regex("(unbalanced").apply("anything", "f"),
			Err(TransformationError::BadRegex(_))
		);
	}
}
