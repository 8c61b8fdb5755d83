pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub(crate) mod mask_regexps;
pub mod errors;
pub mod enums;
mod helper_types;
mod options;
pub mod phonefield;

pub use enums::{PickerState, Separator};
pub use helper_types::{DigitGroup, GroupingPattern};
pub use options::PhoneFieldOptions;
pub use phonefield::PhoneField;
