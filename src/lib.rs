mod interfaces;
mod metadata;
mod phonefield;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Rows of the country table are written through a macro, so the fallback
/// digit limit and mask are spelled out in one place only.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::ChangeListener;
pub use metadata::{COUNTRY_TABLE, CountryMetadata, CountryTable};
pub use phonefield::{
    DigitGroup, GroupingPattern, PhoneField, PhoneFieldOptions, PickerState, Separator,
    enums, errors,
};
