use calamine::{CellErrorType, Data};

use crate::data::cell::Cell;

#[test]
fn test_text() {
    assert_eq!(Cell::from(&Data::String("John".into())).as_text(), Some("John".into()));
    assert_eq!(Cell::from(Some("555-0101")).as_text(), Some("555-0101".into()));
    assert_eq!(Cell::from(Some("")).as_text(), None);
    assert_eq!(Cell::from(None::<&str>).as_text(), None);
}

#[test]
fn test_raw_bytes() {
    assert_eq!(Cell::from(Some(&b"555-0101"[..])).as_text(), Some("555-0101".into()));
    assert_eq!(Cell::from(Some(&b"Bad \xff Name"[..])).as_text(), None);
    assert_eq!(Cell::from(None::<&[u8]>).as_text(), None);
}

#[test]
fn test_whole_numbers_drop_fraction() {
    assert_eq!(Cell::from(&Data::Float(5550101.0)).as_text(), Some("5550101".into()));
    assert_eq!(Cell::from(&Data::Float(-3.0)).as_text(), Some("-3".into()));
    assert_eq!(Cell::from(&Data::Int(42)).as_text(), Some("42".into()));
}

#[test]
fn test_fractional_numbers() {
    assert_eq!(Cell::from(&Data::Float(12.5)).as_text(), Some("12.5".into()));
    assert_eq!(Cell::from(&Data::Float(0.25)).as_text(), Some("0.25".into()));
}

#[test]
fn test_booleans() {
    assert_eq!(Cell::from(&Data::Bool(true)).as_text(), Some("true".into()));
    assert_eq!(Cell::from(&Data::Bool(false)).as_text(), Some("false".into()));
}

#[test]
fn test_unusable_cells() {
    assert_eq!(Cell::from(&Data::Empty).as_text(), None);
    assert_eq!(Cell::from(&Data::Error(CellErrorType::Div0)).as_text(), None);
    assert_eq!(Cell::from(None::<&Data>).as_text(), None);
}
