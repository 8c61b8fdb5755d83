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

use std::fmt;

use crate::regex_util::RegexFullMatch;

use super::{
    Separator,
    errors::MaskError,
    helper_constants::MASK_DIGIT,
    mask_regexps::MASK_REGEXPS,
};

/// One group of a grouping pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGroup {
    pub len: usize,
    /// Separator placed in front of this group. Always `None` for the first
    /// group of a pattern.
    pub separator: Option<Separator>,
}

/// Ordered digit-group lengths, together with the separators placed between
/// them, used to render a national number for display.
///
/// Formatting is greedy: groups are filled left to right, a separator is only
/// written once at least one digit of the following group is present, and any
/// digits beyond the sum of the group lengths are appended without further
/// separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupingPattern {
    groups: Vec<DigitGroup>,
}

impl GroupingPattern {
    /// Builds a pattern from group lengths, putting the same separator between
    /// every pair of groups.
    pub fn new(group_lengths: &[usize], separator: Separator) -> Result<Self, MaskError> {
        if group_lengths.is_empty() {
            return Err(MaskError::Empty);
        }
        if group_lengths.contains(&0) {
            return Err(MaskError::ZeroLengthGroup);
        }
        let groups = group_lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| DigitGroup {
                len,
                separator: (i > 0).then_some(separator),
            })
            .collect();
        Ok(Self { groups })
    }

    /// Parses a display mask such as `XXX-XXX-XXXX` or `XX XXXXX-XXXX`.
    pub fn parse(mask: &str) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::Empty);
        }
        let regexps = &*MASK_REGEXPS;
        if !regexps.valid_mask_pattern.full_match(mask) {
            return Err(MaskError::Malformed(mask.to_owned()));
        }

        let mut groups = Vec::new();
        let mut previous_end = None;
        for found in regexps.digit_group_pattern.find_iter(mask) {
            // The mask was fully matched above, so exactly one separator
            // character sits between two groups.
            let separator = previous_end.and_then(|end: usize| {
                mask[end..found.start()]
                    .chars()
                    .next()
                    .and_then(Separator::from_char)
            });
            groups.push(DigitGroup {
                len: found.as_str().len(),
                separator,
            });
            previous_end = Some(found.end());
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[DigitGroup] {
        &self.groups
    }

    pub fn group_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().map(|group| group.len)
    }

    /// Sum of all group lengths.
    pub fn total_len(&self) -> usize {
        self.group_lengths().sum()
    }

    /// Inserts separators into a string of ASCII digits.
    pub fn format(&self, digits: &str) -> String {
        let mut formatted = String::with_capacity(digits.len() + self.groups.len());
        let mut rest = digits;
        for group in &self.groups {
            if rest.is_empty() {
                break;
            }
            if let Some(separator) = group.separator {
                formatted.push(separator.as_char());
            }
            let (head, tail) = rest.split_at(group.len.min(rest.len()));
            formatted.push_str(head);
            rest = tail;
        }
        formatted.push_str(rest);
        formatted
    }
}

impl fmt::Display for GroupingPattern {
    /// Renders the pattern back as a display mask, e.g. `XXX-XXX-XXXX`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            if let Some(separator) = group.separator {
                write!(f, "{}", separator.as_char())?;
            }
            for _ in 0..group.len {
                write!(f, "{}", MASK_DIGIT)?;
            }
        }
        Ok(())
    }
}
