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

/// Returns every decimal digit of `text` as ASCII, in order. Any Unicode
/// decimal digit (full-width, Arabic-Indic, ...) is converted first, all
/// other characters are dropped.
pub(crate) fn extract_digits(text: &str) -> String {
    dec_from_char::normalize_decimals(text)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Cuts a string of ASCII digits down to `limit` characters.
/// Returns true if anything was removed.
pub(crate) fn truncate_to_limit(digits: &mut String, limit: usize) -> bool {
    if digits.len() <= limit {
        return false;
    }
    digits.truncate(limit);
    true
}
