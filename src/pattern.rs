/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the regular expression extraction strategy

use regex::{Captures, Regex, RegexBuilder};

use crate::{
	error::BadRegexError,
	extracted::{ExtractedValue, ExtractedValues},
};

/// Compile `expression` into a case-insensitive [`Regex`]
///
/// # Errors
/// if `expression` isn't a valid regular expression
pub fn compile(expression: &str) -> Result<Regex, BadRegexError> {
	RegexBuilder::new(expression)
		.case_insensitive(true)
		.build()
		.map_err(BadRegexError)
}

/// Extract variables from all non-overlapping matches of `re` in `field_value`, scanning left to right.
///
/// If `re` has named capture groups, each match replaces all previously extracted values with its named groups.
/// Otherwise each match sets `field_name` to its first capture group, or the whole match if the group is missing or empty.
/// Either way a match overwrites whatever the previous one has extracted, so only the last match is reflected in the result.
///
/// An empty match right after the end of the previous match counts as a match of its own
#[must_use]
pub fn extract(re: &Regex, field_value: &str, field_name: &str) -> ExtractedValues {
	let Some(caps) = last_match(re, field_value) else {
		tracing::trace!("Regex {re} didn't match anything");
		return ExtractedValues::new();
	};

	if has_named_groups(re) {
		named_groups(re, &caps)
	} else {
		let value = caps
			.get(1)
			.map(|group| group.as_str())
			.filter(|group| !group.is_empty())
			.unwrap_or(&caps[0]);

		ExtractedValues::from([(field_name.to_owned(), ExtractedValue::from(value))])
	}
}

fn last_match<'h>(re: &Regex, field_value: &'h str) -> Option<Captures<'h>> {
	let last = re.captures_iter(field_value).last()?;
	let whole = last.get(0).map_or(0..0, |m| m.range());
	if whole.is_empty() {
		return Some(last);
	}

	// captures_iter() skips an empty match that starts where the previous one ended,
	// it's still the last one if it exists since nothing else matched after that point
	let trailing_empty = re
		.captures_at(field_value, whole.end)
		.filter(|caps| caps.get(0).is_some_and(|m| m.is_empty() && m.start() == whole.end));

	Some(trailing_empty.unwrap_or(last))
}

fn has_named_groups(re: &Regex) -> bool {
	re.capture_names().flatten().next().is_some()
}

/// All named groups of `re` in the order they are declared in, even those that didn't participate in the match
fn named_groups(re: &Regex, caps: &Captures<'_>) -> ExtractedValues {
	re.capture_names()
		.flatten()
		.map(|name| {
			let value = caps
				.name(name)
				.map_or(ExtractedValue::Undefined, |group| group.as_str().into());

			(name.to_owned(), value)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]
	#![allow(clippy::missing_assert_message)]

	use super::*;

	fn run(re: &str, field_value: &str, field_name: &str) -> Vec<(String, ExtractedValue)> {
		extract(&compile(re).unwrap(), field_value, field_name)
			.into_iter()
			.collect()
	}

	fn pair(key: &str, value: &str) -> (String, ExtractedValue) {
		(key.to_owned(), value.into())
	}

	#[test]
	fn named_groups_in_declaration_order() {
		assert_eq!(
			run(r"(?<user>\w+)@(?<domain>\w+)", "alice@example", "email"),
			[pair("user", "alice"), pair("domain", "example")]
		);
	}

	#[test]
	fn first_group() {
		assert_eq!(
			run(r"status=(\d+)", "status=200 ok", "code"),
			[pair("code", "200")]
		);
	}

	#[test]
	fn whole_match_without_groups() {
		assert_eq!(
			run("error", "an error occurred", "lvl"),
			[pair("lvl", "error")]
		);
	}

	#[test]
	fn whole_match_if_first_group_is_empty() {
		assert_eq!(run(r"id:(\d*)", "id: 1", "id"), [pair("id", "id:")]);
	}

	#[test]
	fn whole_match_if_first_group_did_not_participate() {
		assert_eq!(run(r"v(\d)?x", "vx", "v"), [pair("v", "vx")]);
	}

	#[test]
	fn case_insensitive() {
		assert_eq!(run("error", "ERROR!", "lvl"), [pair("lvl", "ERROR")]);
	}

	#[test]
	fn repeated_unnamed_matches_overwrite() {
		assert_eq!(run(r"a=(\d+)", "a=1 a=2", "a"), [pair("a", "2")]);
	}

	#[test]
	fn repeated_named_matches_replace() {
		assert_eq!(
			run(r"(?<k>\w+)=(?<v>\w+)", "x=1 y=2", "field"),
			[pair("k", "y"), pair("v", "2")]
		);
	}

	#[test]
	fn unmatched_named_group_is_undefined() {
		assert_eq!(
			run(r"(?<user>\w+)(?:@(?<domain>\w+))?", "alice", "email"),
			[
				pair("user", "alice"),
				("domain".to_owned(), ExtractedValue::Undefined)
			]
		);
	}

	#[test]
	fn unnamed_groups_are_ignored_next_to_named_ones() {
		assert_eq!(
			run(r"(\w+)-(?<id>\d+)", "order-17", "field"),
			[pair("id", "17")]
		);
	}

	#[test]
	fn trailing_empty_match_is_last() {
		assert_eq!(run(r"(\d*)", "id 42", "n"), [pair("n", "")]);
		assert_eq!(run("a*", "ba", "a"), [pair("a", "")]);
	}

	#[test]
	fn trailing_empty_match_with_named_groups() {
		assert_eq!(run(r"(?<n>\d*)", "ab12", "field"), [pair("n", "")]);
	}

	#[test]
	fn empty_match_after_last_non_empty_one() {
		// \b matches between "2" and " " but nowhere after it
		assert_eq!(run(r"(\d+|\b)", "12 ", "n"), [pair("n", "")]);
	}

	#[test]
	fn non_empty_last_match_without_trailing_empty_one() {
		assert_eq!(run(r"(\d+)", "id 42", "n"), [pair("n", "42")]);
	}

	#[test]
	fn unicode_word_characters() {
		assert_eq!(run(r"(\w+)", "Zürich", "city"), [pair("city", "Zürich")]);
	}

	#[test]
	fn no_match() {
		assert!(run(r"\d+", "no digits here", "n").is_empty());
	}

	#[test]
	fn bad_regex() {
		assert!(compile("(unbalanced").is_err());
	}
}
