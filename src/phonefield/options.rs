use super::helper_constants::DEFAULT_PLACEHOLDER;

/// Initial configuration of a [`super::PhoneField`].
///
/// ```
/// use phonefield::PhoneFieldOptions;
///
/// let options = PhoneFieldOptions::default()
///     .default_country("GB")
///     .placeholder("Mobile number")
///     .value("+442012345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFieldOptions {
    pub(super) default_country: Option<String>,
    pub(super) placeholder: String,
    pub(super) value: Option<String>,
    pub(super) error: Option<String>,
}

impl Default for PhoneFieldOptions {
    fn default() -> Self {
        Self {
            default_country: None,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            value: None,
            error: None,
        }
    }
}

impl PhoneFieldOptions {
    /// ISO code of the country selected on creation. Without it the first
    /// entry of the table is selected.
    pub fn default_country(mut self, iso_code: impl Into<String>) -> Self {
        self.default_country = Some(iso_code.into());
        self
    }

    /// Text shown while no digit has been entered.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Canonical value the field is seeded from, e.g. `+15551234567`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Validation message supplied by the owning form.
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
