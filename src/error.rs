/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains all errors that [`datalink_transform`](`crate`) can emit

/// The regular expression of a [`Transformation`](`crate::Transformation`) isn't valid
#[derive(thiserror::Error, Debug)]
#[error("Invalid regular expression")]
pub struct BadRegexError(#[from] pub regex::Error);

/// An error that occured while applying a [`Transformation`](`crate::Transformation`) to a field value.
///
/// Everything except a broken expression degrades to an empty or partial result instead
#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Debug)]
pub enum TransformationError {
	#[error("Can't compile the transformation expression")]
	BadRegex(#[from] BadRegexError),
}
