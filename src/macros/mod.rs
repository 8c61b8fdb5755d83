/// This macro declares one row of the compiled-in country table.
///
/// Rows without formatting data take the fallback digit limit and display
/// mask, so only countries with a known national format spell them out:
///
/// `country!("US", "United States", "+1", 10, "XXX-XXX-XXXX")`
/// `country!("NL", "Netherlands", "+31")`
macro_rules! country {
    ($iso_code:literal, $display_name:literal, $dial_code:literal) => {
        $crate::metadata::CountryRecord {
            iso_code: $iso_code,
            display_name: $display_name,
            dial_code: $dial_code,
            national_digit_limit: $crate::phonefield::helper_constants::FALLBACK_DIGIT_LIMIT,
            mask: $crate::phonefield::helper_constants::FALLBACK_MASK,
        }
    };
    ($iso_code:literal, $display_name:literal, $dial_code:literal, $limit:literal, $mask:literal) => {
        $crate::metadata::CountryRecord {
            iso_code: $iso_code,
            display_name: $display_name,
            dial_code: $dial_code,
            national_digit_limit: $limit,
            mask: $mask,
        }
    };
}

pub(crate) use country;
