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

use crate::{
    i18n::RegionCode,
    phonefield::{GroupingPattern, errors::CountryTableError},
};

/// Dialing and display data of one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryMetadata {
    iso_code: String,
    display_name: String,
    dial_code: String,
    national_digit_limit: usize,
    grouping_pattern: GroupingPattern,
}

impl CountryMetadata {
    /// Creates an entry. Nothing is checked here; invariants are enforced
    /// when entries are collected into a [`crate::CountryTable`].
    pub fn new(
        iso_code: impl Into<String>,
        display_name: impl Into<String>,
        dial_code: impl Into<String>,
        national_digit_limit: usize,
        grouping_pattern: GroupingPattern,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            display_name: display_name.into(),
            dial_code: dial_code.into(),
            national_digit_limit,
            grouping_pattern,
        }
    }

    /// Creates an entry from a display mask such as `XXX-XXX-XXXX`.
    pub fn with_mask(
        iso_code: impl Into<String>,
        display_name: impl Into<String>,
        dial_code: impl Into<String>,
        national_digit_limit: usize,
        mask: &str,
    ) -> Result<Self, CountryTableError> {
        let iso_code = iso_code.into();
        let grouping_pattern = match GroupingPattern::parse(mask) {
            Ok(pattern) => pattern,
            Err(source) => return Err(CountryTableError::InvalidMask { iso_code, source }),
        };
        Ok(Self::new(
            iso_code,
            display_name,
            dial_code,
            national_digit_limit,
            grouping_pattern,
        ))
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// International calling prefix, including the leading `+`.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Maximum count of national significant digits accepted.
    pub fn national_digit_limit(&self) -> usize {
        self.national_digit_limit
    }

    pub fn grouping_pattern(&self) -> &GroupingPattern {
        &self.grouping_pattern
    }

    /// Flag glyph derived from the ISO code. Empty if the code is not a
    /// valid region code.
    pub fn flag(&self) -> String {
        RegionCode::flag(&self.iso_code).unwrap_or_default()
    }

    /// Groups national digits for display.
    pub fn format_digits(&self, digits: &str) -> String {
        self.grouping_pattern.format(digits)
    }

    /// Dial code followed by the national digits, without separators.
    pub fn canonical_value(&self, digits: &str) -> String {
        fast_cat::concat_str!(&self.dial_code, digits)
    }

    /// Picker search: the name contains the query case-insensitively, or the
    /// dial code contains it verbatim. `lowercase_query` must be
    /// `query.to_lowercase()`.
    pub(crate) fn matches_query(&self, query: &str, lowercase_query: &str) -> bool {
        self.display_name.to_lowercase().contains(lowercase_query)
            || self.dial_code.contains(query)
    }
}
