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

use strum::{EnumIter, IntoEnumIterator};

/// Visibility of the country selection overlay.
///
/// The picker only knows two states: it opens when the selector button is
/// activated and closes on selection, dismiss or confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerState {
    /// **Overlay hidden.** The field only shows the selected country and the digits.
    #[default]
    Closed,
    /// **Overlay visible.** The search query filters the country list.
    Open,
}

/// Characters that may be placed between two digit groups of a display mask.
///
/// For example, `XX XXXXX-XXXX` (Brazil) uses a `Space` before the second group
/// and a `Hyphen` before the third one.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `-`, as in `555-123-4567`.
    Hyphen,
    /// ` `, as in `2012 345 678`.
    Space,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Space => ' ',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::iter().find(|separator| separator.as_char() == c)
    }
}
