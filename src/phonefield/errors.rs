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

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum MaskError {
    #[error("Display mask is empty")]
    Empty,
    #[error("Display mask '{0}' must be groups of 'X' separated by a single '-' or ' '")]
    Malformed(String),
    #[error("Grouping pattern contains a zero-length group")]
    ZeroLengthGroup,
}

#[derive(Debug, PartialEq, Error)]
pub enum CountryTableError {
    #[error("Country table must contain at least one country")]
    Empty,
    #[error("Invalid ISO code '{0}', expected two uppercase ASCII letters")]
    InvalidIsoCode(String),
    #[error("Duplicate ISO code {0}")]
    DuplicateIsoCode(String),
    #[error("Country {0} must accept at least one national digit")]
    ZeroDigitLimit(String),
    #[error("Country {iso_code} has invalid dial code '{dial_code}'")]
    InvalidDialCode { iso_code: String, dial_code: String },
    #[error("Country {iso_code} has invalid display mask: {source}")]
    InvalidMask {
        iso_code: String,
        #[source]
        source: MaskError,
    },
}

#[derive(Debug, PartialEq, Error)]
pub enum PhoneFieldError {
    #[error("Unknown country code {0}")]
    UnknownCountry(String),
}
