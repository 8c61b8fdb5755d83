use std::fmt;

use log::{trace, warn};

use crate::{
    interfaces::ChangeListener,
    metadata::{CountryMetadata, CountryTable},
    phonefield::{
        PhoneFieldOptions, PickerState,
        errors::PhoneFieldError,
        helper_functions::{extract_digits, truncate_to_limit},
    },
    string_util::{normalize_international, strip_cow_prefix},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneFieldError>;

/// State of a country-aware phone number input.
///
/// The field owns the selected country, the national digits typed so far and
/// the country picker. The owning form holds the durable value: it receives
/// the canonical value (`dial code + digits`) through a [`ChangeListener`]
/// on every accepted edit and pushes its own changes back with
/// [`PhoneField::on_external_value_change`].
///
/// None of the input handlers fail. Non-digit characters are dropped and
/// digits beyond the selected country's limit are cut off silently.
pub struct PhoneField<'a> {
    table: &'a CountryTable,

    /// Position of the selected country in `table`.
    selected: usize,

    /// ASCII digits, never longer than the selected country's limit.
    raw_digits: String,

    picker: PickerState,
    search_query: String,

    placeholder: String,
    error: Option<String>,

    listener: Option<Box<dyn ChangeListener + 'a>>,
}

impl PhoneField<'static> {
    /// Creates a field backed by the compiled-in country table.
    pub fn new(options: PhoneFieldOptions) -> Result<Self> {
        Self::with_table(CountryTable::builtin(), options)
    }
}

impl<'a> PhoneField<'a> {
    /// Creates a field backed by a custom country table.
    ///
    /// Fails if the configured default country is not in the table. A seed
    /// value is applied like [`PhoneField::on_external_value_change`], without
    /// notifying anyone.
    pub fn with_table(table: &'a CountryTable, options: PhoneFieldOptions) -> Result<Self> {
        let selected = match options.default_country.as_deref() {
            Some(iso_code) => table
                .index_of(iso_code)
                .ok_or_else(|| PhoneFieldError::UnknownCountry(iso_code.to_owned()))?,
            None => 0,
        };
        let mut field = Self {
            table,
            selected,
            raw_digits: String::new(),
            picker: PickerState::Closed,
            search_query: String::new(),
            placeholder: options.placeholder,
            error: options.error,
            listener: None,
        };
        if let Some(value) = options.value.as_deref() {
            field.on_external_value_change(value);
        }
        Ok(field)
    }

    /// Registers the owner's change callback, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'a) {
        self.listener = Some(Box::new(listener));
    }

    pub fn with_listener(mut self, listener: impl ChangeListener + 'a) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn table(&self) -> &'a CountryTable {
        self.table
    }

    pub fn selected_country(&self) -> &'a CountryMetadata {
        self.table.get_by_index(self.selected)
    }

    /// National digits as entered, without separators.
    pub fn raw_digits(&self) -> &str {
        &self.raw_digits
    }

    /// Digits grouped with the selected country's separators, e.g.
    /// `555-123-4567`.
    pub fn display_value(&self) -> String {
        self.selected_country().format_digits(&self.raw_digits)
    }

    /// Dial code followed by the digits, e.g. `+15551234567`. This is the
    /// value reported to the owner.
    pub fn canonical_value(&self) -> String {
        self.selected_country().canonical_value(&self.raw_digits)
    }

    /// True once as many digits as the selected country accepts are entered.
    pub fn is_complete(&self) -> bool {
        self.raw_digits.len() == self.selected_country().national_digit_limit()
    }

    /// How many more digits the selected country accepts.
    pub fn remaining_digits(&self) -> usize {
        self.selected_country()
            .national_digit_limit()
            .saturating_sub(self.raw_digits.len())
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Validation message supplied by the owner, shown verbatim below the
    /// field. The field never produces one itself.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn picker_state(&self) -> PickerState {
        self.picker
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker == PickerState::Open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Countries listed by the picker for the current search query, in table
    /// order.
    pub fn filtered_countries(&self) -> Vec<&'a CountryMetadata> {
        self.table.filter(&self.search_query)
    }

    /// Handles a keystroke or paste. `raw_text` is the whole content of the
    /// digit input; every non-digit is dropped and the digits are cut to the
    /// selected country's limit.
    pub fn on_digit_input(&mut self, raw_text: &str) {
        let mut digits = extract_digits(raw_text);
        let limit = self.selected_country().national_digit_limit();
        if truncate_to_limit(&mut digits, limit) {
            trace!(
                "Dropped digits beyond the {} digit limit of {}",
                limit,
                self.selected_country().iso_code()
            );
        }
        self.raw_digits = digits;
        self.emit_change();
    }

    /// Selects a country from the picker: closes the picker, clears the
    /// search query and cuts the digits to the new country's limit.
    ///
    /// Entries that do not belong to this field's table are ignored.
    pub fn on_country_select(&mut self, country: &CountryMetadata) {
        match self.table.index_of(country.iso_code()) {
            Some(index) => self.apply_selection(index),
            None => warn!(
                "Ignoring selection of {}, it is not part of the country table",
                country.iso_code()
            ),
        }
    }

    /// Same as [`PhoneField::on_country_select`], addressing the country by
    /// ISO code.
    pub fn select_country(&mut self, iso_code: &str) -> Result<()> {
        let index = self
            .table
            .index_of(iso_code)
            .ok_or_else(|| PhoneFieldError::UnknownCountry(iso_code.to_owned()))?;
        self.apply_selection(index);
        Ok(())
    }

    pub fn on_search_query_change(&mut self, text: &str) {
        self.search_query.clear();
        self.search_query.push_str(text);
    }

    /// Reacts to a value pushed by the owner, e.g. when the form is reset.
    ///
    /// A value equal to the current canonical value is ignored. Otherwise the
    /// longest dial code prefixing the value selects the country and the rest
    /// of the value becomes the digits. If the selected country shares the
    /// matched dial code it stays selected. Without any matching dial code the
    /// country is kept and every digit of the value is used.
    ///
    /// The listener is not called: the owner already knows the value.
    pub fn on_external_value_change(&mut self, value: &str) {
        if value == self.canonical_value() {
            return;
        }
        let table = self.table;
        let matched = normalize_international(value).and_then(|normalized| {
            let dial_code = table.longest_matching_dial_code(&normalized)?;
            let index = if self.selected_country().dial_code() == dial_code {
                self.selected
            } else {
                table.first_index_with_dial_code(dial_code)?
            };
            let national = strip_cow_prefix(normalized, dial_code)?;
            Some((index, national.into_owned()))
        });

        match matched {
            Some((index, national)) => {
                self.selected = index;
                self.raw_digits = national;
            }
            None => {
                trace!("No dial code matches {:?}, keeping the selected country", value);
                self.raw_digits = extract_digits(value);
            }
        }
        let limit = self.selected_country().national_digit_limit();
        truncate_to_limit(&mut self.raw_digits, limit);
        trace!(
            "Re-seeded from external value: {} / {}",
            self.selected_country().iso_code(),
            self.raw_digits
        );
    }

    pub fn open_picker(&mut self) {
        self.picker = PickerState::Open;
    }

    /// Closes the picker without changing the selection.
    pub fn dismiss_picker(&mut self) {
        self.picker = PickerState::Closed;
    }

    /// The picker's confirm button. Selection happens on click in the list,
    /// so confirming only closes the picker.
    pub fn confirm_picker(&mut self) {
        self.picker = PickerState::Closed;
    }

    fn apply_selection(&mut self, index: usize) {
        self.selected = index;
        self.picker = PickerState::Closed;
        self.search_query.clear();
        let country = self.selected_country();
        if truncate_to_limit(&mut self.raw_digits, country.national_digit_limit()) {
            trace!(
                "Digits cut to the {} digit limit of {}",
                country.national_digit_limit(),
                country.iso_code()
            );
        }
        trace!("Selected country {}", country.iso_code());
        self.emit_change();
    }

    fn emit_change(&mut self) {
        let canonical_value = self.canonical_value();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&canonical_value);
        }
    }
}

impl fmt::Debug for PhoneField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneField")
            .field("selected_country", &self.selected_country().iso_code())
            .field("raw_digits", &self.raw_digits)
            .field("picker", &self.picker)
            .field("search_query", &self.search_query)
            .field("placeholder", &self.placeholder)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
