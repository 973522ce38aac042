/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `datalink-transform` extracts variables out of a single field value to use them in data links.
//!
//! A [`Transformation`] describes how to do it:
//! * [`TransformationKind::Regex`] matches a case-insensitive regular expression against the value.
//!   Named capture groups become variables of the same name,
//!   otherwise the first capture group (or the whole match) becomes a variable named after the field.
//! * [`TransformationKind::Logfmt`] parses the value as a logfmt line, every key becomes a variable.
//!
//! The result is [`ScopedVars`], a map from a variable name to its text value
//! that can later be interpolated into URLs and labels as `${name}`.
//!
//! # Example
//!
//! ```
//! use datalink_transform::{Transformation, transform};
//!
//! let re = Transformation::regex(r"(?<user>\w+)@(?<domain>\w+)");
//! let vars = transform(&re, "alice@example", "email")?;
//! assert_eq!(vars.value("user"), Some("alice"));
//! assert_eq!(vars.value("domain"), Some("example"));
//!
//! let vars = Transformation::logfmt().apply(r#"level=info msg="hello world" retry"#, "line")?;
//! assert_eq!(vars.value("msg"), Some("hello world"));
//! assert_eq!(vars.value("retry"), Some("true"));
//! # Ok::<(), datalink_transform::error::TransformationError>(())
//! ```
//!
//! Extraction never fails because of the field value itself. The only error is an invalid regular expression

pub mod error;
pub mod extracted;
pub mod logfmt;
pub mod pattern;
pub mod scoped_vars;
pub mod stringify;
pub mod transformation;

#[cfg(feature = "scaffold")]
pub mod scaffold;

pub use self::{
	extracted::{ExtractedValue, ExtractedValues},
	scoped_vars::{ScopedVar, ScopedVars},
	transformation::{Transformation, TransformationKind, transform},
};
