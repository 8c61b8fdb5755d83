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

use std::{collections::HashMap, slice};

use log::{trace, warn};

use crate::{
    i18n::RegionCode,
    phonefield::{errors::CountryTableError, mask_regexps::MASK_REGEXPS},
    regex_util::RegexFullMatch,
    string_util::normalize_international,
};

use super::{COUNTRY_TABLE, CountryMetadata, CountryRecord};

// Helper type for Result
pub type Result<T> = std::result::Result<T, CountryTableError>;

/// Read-only list of supported countries, kept in picker order.
#[derive(Debug)]
pub struct CountryTable {
    countries: Vec<CountryMetadata>,

    /// A mapping from an ISO code to the position of its entry in `countries`.
    iso_code_to_index: HashMap<String, usize>,
}

impl CountryTable {
    /// Builds a table, checking that every entry has a valid and unique ISO
    /// code, a `+<digits>` dial code and a non-zero digit limit.
    pub fn new(countries: Vec<CountryMetadata>) -> Result<Self> {
        if countries.is_empty() {
            return Err(CountryTableError::Empty);
        }
        let dial_code_pattern = &MASK_REGEXPS.dial_code_pattern;
        let mut iso_code_to_index = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            let iso_code = country.iso_code();
            if !RegionCode::is_valid(iso_code) {
                return Err(CountryTableError::InvalidIsoCode(iso_code.to_owned()));
            }
            if country.national_digit_limit() == 0 {
                return Err(CountryTableError::ZeroDigitLimit(iso_code.to_owned()));
            }
            if !dial_code_pattern.full_match(country.dial_code()) {
                return Err(CountryTableError::InvalidDialCode {
                    iso_code: iso_code.to_owned(),
                    dial_code: country.dial_code().to_owned(),
                });
            }
            if iso_code_to_index.insert(iso_code.to_owned(), index).is_some() {
                return Err(CountryTableError::DuplicateIsoCode(iso_code.to_owned()));
            }
        }
        trace!("Built country table with {} entries", countries.len());
        Ok(Self {
            countries,
            iso_code_to_index,
        })
    }

    /// The compiled-in table.
    pub fn builtin() -> &'static CountryTable {
        &COUNTRY_TABLE
    }

    pub(super) fn from_records(records: &[CountryRecord]) -> Result<Self> {
        let countries = records
            .iter()
            .map(|record| {
                CountryMetadata::with_mask(
                    record.iso_code,
                    record.display_name,
                    record.dial_code,
                    record.national_digit_limit,
                    record.mask,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(countries)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, CountryMetadata> {
        self.countries.iter()
    }

    /// The first entry, used when no default country is configured.
    pub fn first(&self) -> &CountryMetadata {
        // construction guarantees at least one entry
        &self.countries[0]
    }

    /// Looks a country up by ISO code, ignoring ASCII case.
    pub fn get(&self, iso_code: &str) -> Option<&CountryMetadata> {
        self.index_of(iso_code).map(|index| &self.countries[index])
    }

    pub(crate) fn index_of(&self, iso_code: &str) -> Option<usize> {
        let index = self
            .iso_code_to_index
            .get(iso_code)
            .or_else(|| self.iso_code_to_index.get(&iso_code.to_ascii_uppercase()))
            .copied();
        if index.is_none() {
            warn!("Invalid or unknown region code provided: {}", iso_code);
        }
        index
    }

    pub(crate) fn get_by_index(&self, index: usize) -> &CountryMetadata {
        &self.countries[index]
    }

    /// Position of the first entry, in table order, using `dial_code`.
    pub(crate) fn first_index_with_dial_code(&self, dial_code: &str) -> Option<usize> {
        self.countries
            .iter()
            .position(|country| country.dial_code() == dial_code)
    }

    /// Returns the longest dial code of the table that prefixes `normalized`,
    /// a `+<digits>` string.
    pub(crate) fn longest_matching_dial_code(&self, normalized: &str) -> Option<&str> {
        self.countries
            .iter()
            .map(CountryMetadata::dial_code)
            .filter(|dial_code| normalized.starts_with(*dial_code))
            .max_by_key(|dial_code| dial_code.len())
    }

    /// Finds the country an international number belongs to by the longest
    /// dial code prefix. Among countries sharing that dial code the first one
    /// in table order wins, so `+1...` resolves to the United States rather
    /// than Canada while `+1876...` resolves to Jamaica.
    pub fn find_by_dial_prefix(&self, value: &str) -> Option<&CountryMetadata> {
        let normalized = normalize_international(value)?;
        let dial_code = self.longest_matching_dial_code(&normalized)?;
        self.first_index_with_dial_code(dial_code)
            .map(|index| &self.countries[index])
    }

    /// Every country whose name contains `query` case-insensitively or whose
    /// dial code contains it as a substring, in table order. An empty query
    /// matches every country.
    pub fn filter(&self, query: &str) -> Vec<&CountryMetadata> {
        let lowercase_query = query.to_lowercase();
        self.countries
            .iter()
            .filter(|country| country.matches_query(query, &lowercase_query))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a CountryMetadata;
    type IntoIter = slice::Iter<'a, CountryMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
