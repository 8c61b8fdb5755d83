mod countries;
mod country_metadata;
mod country_table;

use std::sync::LazyLock;

pub use country_metadata::CountryMetadata;
pub use country_table::CountryTable;

/// One row of the compiled-in table, see `macros::country`.
pub(crate) struct CountryRecord {
    pub iso_code: &'static str,
    pub display_name: &'static str,
    pub dial_code: &'static str,
    pub national_digit_limit: usize,
    pub mask: &'static str,
}

pub static COUNTRY_TABLE: LazyLock<CountryTable> = LazyLock::new(|| {
    match CountryTable::from_records(countries::COUNTRY_RECORDS) {
        Err(err) => {
            let err_message = format!("Could not build compiled-in country table: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(table) => table,
    }
});
