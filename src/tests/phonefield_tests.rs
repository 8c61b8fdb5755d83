use std::{cell::RefCell, rc::Rc};

use crate::{
    CountryMetadata, CountryTable, GroupingPattern, PhoneField, PhoneFieldOptions, PickerState,
    Separator, errors::PhoneFieldError,
};

use super::{init_logger, region_code::RegionCode};

type Emitted = Rc<RefCell<Vec<String>>>;

fn get_phone_field(options: PhoneFieldOptions) -> (PhoneField<'static>, Emitted) {
    init_logger();
    let emitted = Emitted::default();
    let sink = emitted.clone();
    let field = PhoneField::new(options)
        .expect("options should be valid")
        .with_listener(move |value: &str| sink.borrow_mut().push(value.to_owned()));
    (field, emitted)
}

fn last_emitted(emitted: &Emitted) -> Option<String> {
    emitted.borrow().last().cloned()
}

#[test]
fn defaults() {
    let (field, emitted) = get_phone_field(PhoneFieldOptions::default());
    assert_eq!(field.selected_country().iso_code(), RegionCode::us());
    assert_eq!(field.raw_digits(), "");
    assert_eq!(field.display_value(), "");
    assert_eq!(field.canonical_value(), "+1");
    assert_eq!(field.placeholder(), "Phone Number");
    assert_eq!(field.error(), None);
    assert_eq!(field.picker_state(), PickerState::Closed);
    assert_eq!(field.search_query(), "");
    assert!(emitted.borrow().is_empty());
}

#[test]
fn typing_a_us_number() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("5551234567");
    assert_eq!(field.display_value(), "555-123-4567");
    assert_eq!(field.canonical_value(), "+15551234567");
    assert_eq!(*emitted.borrow(), vec!["+15551234567"]);
    assert!(field.is_complete());
    assert_eq!(field.remaining_digits(), 0);
}

#[test]
fn display_grows_while_typing() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    let steps = [
        ("5", "5"),
        ("555", "555"),
        ("5551", "555-1"),
        ("555-12", "555-12"),
        ("555-1234", "555-123-4"),
    ];
    for (typed, displayed) in steps {
        field.on_digit_input(typed);
        assert_eq!(field.display_value(), displayed);
    }
    assert_eq!(emitted.borrow().len(), steps.len());
    assert_eq!(last_emitted(&emitted).as_deref(), Some("+15551234"));
    assert!(!field.is_complete());
    assert_eq!(field.remaining_digits(), 3);
}

#[test]
fn digits_beyond_limit_are_dropped() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("55512345678");
    assert_eq!(field.raw_digits(), "5551234567");
    assert_eq!(field.canonical_value(), "+15551234567");
    assert_eq!(last_emitted(&emitted).as_deref(), Some("+15551234567"));

    field.on_digit_input("5551234567890123");
    assert_eq!(field.raw_digits(), "5551234567");
}

#[test]
fn non_digits_are_dropped() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("(555) 123-4567");
    assert_eq!(field.raw_digits(), "5551234567");

    field.on_digit_input("５５５ abc");
    assert_eq!(field.raw_digits(), "555");

    field.on_digit_input("---");
    assert_eq!(field.raw_digits(), "");
    assert_eq!(last_emitted(&emitted).as_deref(), Some("+1"));
}

#[test]
fn selecting_pakistan_keeps_digits() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("5551234567");
    field.open_picker();
    field.on_search_query_change("pak");
    let pakistan = field.filtered_countries()[0];
    assert_eq!(pakistan.iso_code(), RegionCode::pk());

    field.on_country_select(pakistan);
    assert_eq!(field.selected_country().iso_code(), RegionCode::pk());
    assert_eq!(field.raw_digits(), "5551234567");
    assert_eq!(field.canonical_value(), "+925551234567");
    assert_eq!(field.display_value(), "555-1234567");
    assert_eq!(last_emitted(&emitted).as_deref(), Some("+925551234567"));
    assert_eq!(field.picker_state(), PickerState::Closed);
    assert_eq!(field.search_query(), "");
}

#[test]
fn switching_country_truncates_to_smaller_limit() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("5551234567");

    field.select_country(RegionCode::lb()).unwrap();
    assert_eq!(field.raw_digits(), "55512345");
    assert_eq!(field.display_value(), "55 512 345");
    assert_eq!(last_emitted(&emitted).as_deref(), Some("+96155512345"));

    // A larger limit leaves the digits as they are.
    field.select_country(RegionCode::de()).unwrap();
    assert_eq!(field.raw_digits(), "55512345");
    assert_eq!(field.canonical_value(), "+4955512345");
}

#[test]
fn selecting_unknown_country() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("5551234567");

    assert_eq!(
        field.select_country(RegionCode::zz()),
        Err(PhoneFieldError::UnknownCountry("ZZ".to_owned()))
    );

    let kosovo = CountryMetadata::new(
        "XK",
        "Kosovo",
        "+383",
        8,
        GroupingPattern::new(&[2, 3, 3], Separator::Space).unwrap(),
    );
    field.on_country_select(&kosovo);

    assert_eq!(field.selected_country().iso_code(), RegionCode::us());
    assert_eq!(field.raw_digits(), "5551234567");
    assert_eq!(emitted.borrow().len(), 1);
}

#[test]
fn picker_state_machine() {
    let (mut field, _) = get_phone_field(PhoneFieldOptions::default());
    assert!(!field.is_picker_open());

    field.open_picker();
    assert!(field.is_picker_open());
    field.on_search_query_change("ger");
    let found = field
        .filtered_countries()
        .into_iter()
        .map(CountryMetadata::iso_code)
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["DE", "DZ", "NE", "NG"]);

    field.dismiss_picker();
    assert_eq!(field.picker_state(), PickerState::Closed);
    assert_eq!(field.selected_country().iso_code(), RegionCode::us());
    assert_eq!(field.search_query(), "ger");

    field.open_picker();
    field.confirm_picker();
    assert_eq!(field.picker_state(), PickerState::Closed);
    assert_eq!(field.selected_country().iso_code(), RegionCode::us());
}

#[test]
fn seeded_from_value_on_creation() {
    let (field, emitted) =
        get_phone_field(PhoneFieldOptions::default().value("+442012345678"));
    assert_eq!(field.selected_country().iso_code(), RegionCode::gb());
    assert_eq!(field.raw_digits(), "2012345678");
    assert_eq!(field.display_value(), "2012 345 678");
    assert_eq!(field.canonical_value(), "+442012345678");
    assert!(emitted.borrow().is_empty());
}

#[test]
fn external_value_change() {
    let (mut field, emitted) = get_phone_field(PhoneFieldOptions::default());
    field.on_digit_input("5551234567");

    field.on_external_value_change("+18765551234");
    assert_eq!(field.selected_country().iso_code(), RegionCode::jm());
    assert_eq!(field.raw_digits(), "5551234");

    field.on_external_value_change("+79161234567");
    assert_eq!(field.selected_country().iso_code(), RegionCode::ru());
    assert_eq!(field.raw_digits(), "9161234567");

    // Form reset.
    field.on_external_value_change("");
    assert_eq!(field.selected_country().iso_code(), RegionCode::ru());
    assert_eq!(field.raw_digits(), "");

    // Re-seeding never reports back to the owner.
    assert_eq!(emitted.borrow().len(), 1);
}

#[test]
fn external_value_equal_to_current_is_ignored() {
    let (mut field, _) = get_phone_field(PhoneFieldOptions::default().default_country("CA"));
    field.on_digit_input("6135550123");
    field.on_external_value_change("+16135550123");
    assert_eq!(field.selected_country().iso_code(), RegionCode::ca());
    assert_eq!(field.raw_digits(), "6135550123");
}

#[test]
fn external_value_keeps_country_sharing_dial_code() {
    let (mut field, _) = get_phone_field(PhoneFieldOptions::default().default_country("CA"));
    field.on_external_value_change("+1 613 555 0199");
    assert_eq!(field.selected_country().iso_code(), RegionCode::ca());
    assert_eq!(field.raw_digits(), "6135550199");

    field.select_country(RegionCode::gb()).unwrap();
    field.on_external_value_change("+16135550199");
    assert_eq!(field.selected_country().iso_code(), RegionCode::us());
}

#[test]
fn external_value_without_dial_code() {
    let (mut field, _) = get_phone_field(PhoneFieldOptions::default().default_country("GB"));
    field.on_external_value_change("020 1234 5678");
    assert_eq!(field.selected_country().iso_code(), RegionCode::gb());
    assert_eq!(field.raw_digits(), "0201234567");

    field.on_external_value_change("+999 123");
    assert_eq!(field.selected_country().iso_code(), RegionCode::gb());
    assert_eq!(field.raw_digits(), "999123");
}

#[test]
fn external_value_is_clamped() {
    let (mut field, _) = get_phone_field(PhoneFieldOptions::default());
    field.on_external_value_change("+4420123456789999");
    assert_eq!(field.selected_country().iso_code(), RegionCode::gb());
    assert_eq!(field.raw_digits(), "2012345678");
}

#[test]
fn error_and_placeholder_are_passed_through() {
    let (mut field, _) = get_phone_field(
        PhoneFieldOptions::default()
            .placeholder("Mobile number")
            .error("Phone number is required"),
    );
    assert_eq!(field.placeholder(), "Mobile number");
    assert_eq!(field.error(), Some("Phone number is required"));

    field.on_digit_input("5551234567");
    assert_eq!(field.error(), Some("Phone number is required"));

    field.set_error(None);
    assert_eq!(field.error(), None);
}

#[test]
fn unknown_default_country() {
    init_logger();
    assert_eq!(
        PhoneField::new(PhoneFieldOptions::default().default_country("ZZ")).unwrap_err(),
        PhoneFieldError::UnknownCountry("ZZ".to_owned())
    );
}

#[test]
fn custom_table() {
    init_logger();
    let table = CountryTable::new(vec![
        CountryMetadata::with_mask("XK", "Kosovo", "+383", 8, "XX XXX XXX").unwrap(),
        CountryMetadata::with_mask("AL", "Albania", "+355", 9, "XX XXX XXXX").unwrap(),
    ])
    .unwrap();
    let mut emitted = Vec::new();
    {
        let mut field = PhoneField::with_table(&table, PhoneFieldOptions::default())
            .unwrap()
            .with_listener(|value: &str| emitted.push(value.to_owned()));
        assert_eq!(field.selected_country().iso_code(), "XK");

        field.on_digit_input("44123456789");
        assert_eq!(field.display_value(), "44 123 456");

        field.on_external_value_change("+355691234567");
        assert_eq!(field.selected_country().iso_code(), "AL");
        assert_eq!(field.display_value(), "69 123 4567");
        assert_eq!(field.filtered_countries().len(), 2);
    }
    assert_eq!(emitted, vec!["+38344123456"]);
}
