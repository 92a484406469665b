use super::apply;
use vali_rail::actions::{is_isbn, isbn};

#[test]
fn valid_isbn10_and_isbn13() {
    for input in [
        "0306406152",
        "0-306-40615-2",
        "0 306 40615 2",
        "080442957X",
        "9780306406157",
        "978-0-306-40615-7",
        "978 0 306 40615 7",
    ] {
        assert!(is_isbn(input), "{input} should be valid");
        assert!(apply(&isbn(), input).is_success());
    }
}

#[test]
fn invalid_isbns() {
    for input in [
        "0306406153",
        "9780306406158",
        "020530902x",
        "X306406152",
        "030640615",
        "97803064061570",
        "978-0-306-40615-A",
        "0_306_40615_2",
        "",
    ] {
        assert!(!is_isbn(input), "{input:?} should be invalid");
    }
}

#[test]
fn bad_checksum_reports_isbn_issue() {
    let dataset = apply(&isbn(), "0306406153");

    assert_eq!(dataset.issues().len(), 1);
    assert_eq!(dataset.issues()[0].issue_type(), "isbn");
    assert_eq!(dataset.issues()[0].message(), "Invalid ISBN: Received \"0306406153\"");
}

#[test]
fn lowercase_check_character_is_rejected() {
    assert_eq!(apply(&isbn(), "020530902x").issues().len(), 1);
    assert!(apply(&isbn(), "020530902X").is_success());
}
