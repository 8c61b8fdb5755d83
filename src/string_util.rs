// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use crate::phonefield::{
    helper_constants::{PLUS_CHARS, PLUS_SIGN},
    helper_functions::extract_digits,
};

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if !s.starts_with(prefix) {
                return None;
            }
            s.drain(..prefix.len());
            Some(Cow::Owned(s))
        }
    }
}

/// Brings an international number to the `+<digits>` shape that dial codes
/// are matched against. Returns `None` when the value does not start with a
/// plus character, as such a value cannot carry a dial code.
///
/// A value that is already canonical is returned borrowed.
pub fn normalize_international<'a>(value: &'a str) -> Option<Cow<'a, str>> {
    let trimmed = value.trim();
    let rest = trimmed.strip_prefix(PLUS_CHARS)?;
    if trimmed.starts_with(PLUS_SIGN) && rest.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Cow::Borrowed(trimmed));
    }
    let digits = extract_digits(rest);
    Some(Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &digits)))
}
