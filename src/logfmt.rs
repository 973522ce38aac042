/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains a best-effort [logfmt](https://brandur.org/logfmt) parser.
//!
//! A line is a whitespace separated list of `key=value` pairs and bare `key` flags.
//! Values may be quoted to keep whitespace in them.
//! Parsing never fails: pairs that don't make sense are skipped and parsing continues with the next one

use std::{iter::Peekable, str::Chars};

use crate::extracted::{ExtractedValue, ExtractedValues};

/// Parse all valid pairs of a logfmt `line`.
///
/// If a key is repeated, the last value wins but the key keeps the position of its first occurrence
#[must_use]
pub fn parse(line: &str) -> ExtractedValues {
	Pairs::new(line).collect()
}

/// Iterator over the valid pairs of a logfmt line, in the order they appear in it
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
	chars: Peekable<Chars<'a>>,
}

impl<'a> Pairs<'a> {
	/// Create a new iterator over the pairs of `line`
	#[must_use]
	pub fn new(line: &'a str) -> Self {
		Self {
			chars: line.chars().peekable(),
		}
	}

	fn pair(&mut self) -> Option<(String, ExtractedValue)> {
		let key = self.key()?;

		if self.chars.next_if_eq(&'=').is_none() {
			return Some((key, ExtractedValue::Bool(true)));
		}

		let value = if self.chars.next_if_eq(&'"').is_some() {
			ExtractedValue::String(self.quoted_value()?)
		} else {
			match self.unquoted_value()?.as_str() {
				"true" => ExtractedValue::Bool(true),
				"false" => ExtractedValue::Bool(false),
				other => ExtractedValue::from(other),
			}
		};

		Some((key, value))
	}

	fn key(&mut self) -> Option<String> {
		let mut key = String::new();
		while let Some(c) = self
			.chars
			.next_if(|&c| !c.is_whitespace() && c != '=' && c != '"')
		{
			key.push(c);
		}

		if key.is_empty() || self.chars.peek() == Some(&'"') {
			return None;
		}

		Some(key)
	}

	/// Reads up to and including the closing quote. The opening one should've already been consumed
	fn quoted_value(&mut self) -> Option<String> {
		let mut value = String::new();
		loop {
			match self.chars.next()? {
				'"' => break,
				'\\' => value.push(self.chars.next()?),
				c => value.push(c),
			}
		}

		// the pair should end right after the closing quote
		if self.chars.peek().is_some_and(|c| !c.is_whitespace()) {
			return None;
		}

		Some(value)
	}

	fn unquoted_value(&mut self) -> Option<String> {
		let mut value = String::new();
		while let Some(c) = self.chars.next_if(|&c| !c.is_whitespace() && c != '"') {
			value.push(c);
		}

		if self.chars.peek() == Some(&'"') {
			return None;
		}

		Some(value)
	}

	fn skip_whitespace(&mut self) {
		while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
	}

	/// Skip the rest of the current malformed token, including whitespace inside quotes
	fn skip_token(&mut self) {
		let mut in_quotes = false;
		while let Some(c) = self.chars.next_if(|c| in_quotes || !c.is_whitespace()) {
			match c {
				'"' => in_quotes = !in_quotes,
				'\\' if in_quotes => {
					self.chars.next();
				}
				_ => (),
			}
		}
	}
}

impl Iterator for Pairs<'_> {
	type Item = (String, ExtractedValue);

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			self.skip_whitespace();
			self.chars.peek()?;

			match self.pair() {
				Some(pair) => return Some(pair),
				None => {
					tracing::trace!("Skipping a malformed logfmt pair");
					self.skip_token();
				}
			}
		}
	}
}
