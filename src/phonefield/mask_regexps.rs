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

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use super::{Separator, helper_constants::{MASK_DIGIT, PLUS_SIGN}};

pub(crate) static MASK_REGEXPS: LazyLock<MaskRegExps> = LazyLock::new(MaskRegExps::new);

pub(crate) struct MaskRegExps {
    /// A whole display mask: one or more groups of digit placeholders joined
    /// by exactly one separator character.
    ///
    /// Corresponds to `X+(?:[separators]X+)*`.
    pub valid_mask_pattern: Regex,

    /// A single group of digit placeholders inside a display mask.
    pub digit_group_pattern: Regex,

    /// A dial code: the plus sign followed by ASCII digits only. `\d` is not
    /// used as it also matches non-ASCII decimal digits.
    pub dial_code_pattern: Regex,
}

impl MaskRegExps {
    pub fn new() -> Self {
        let separators = Separator::iter()
            .map(|separator| regex::escape(&separator.as_char().to_string()))
            .collect::<String>();
        let digit = regex::escape(&MASK_DIGIT.to_string());

        // it'll be initialized only once, so we can use slow format!
        Self {
            valid_mask_pattern: Regex::new(&format!(
                "{digit}+(?:[{separators}]{digit}+)*"
            ))
            .unwrap(),
            digit_group_pattern: Regex::new(&format!("{digit}+")).unwrap(),
            dial_code_pattern: Regex::new(&format!("{}[0-9]+", regex::escape(PLUS_SIGN)))
                .unwrap(),
        }
    }
}
