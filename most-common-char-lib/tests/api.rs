use most_common_char_lib::{most_common_byte, most_common_char, CharCount, CountError};

#[test]
fn reports_most_common_letter_of_sentence() {
    let result = most_common_char("hello world").expect("ascii input counts");
    assert_eq!(
        result,
        CharCount {
            character: 'L',
            count: 3,
        }
    );
    assert_eq!(result.to_string(), "'L' 3");
}

#[test]
fn empty_input_yields_space() {
    assert_eq!(most_common_char("").unwrap(), CharCount::default());
    assert_eq!(most_common_byte(b"").unwrap(), CharCount::default());
}

#[test]
fn ties_go_to_lowest_code() {
    assert_eq!(most_common_char("AAAbbb").unwrap().to_string(), "'A' 3");
    assert_eq!(most_common_char("xyz").unwrap().to_string(), "'X' 1");
    assert_eq!(most_common_char("ab").unwrap().to_string(), "'A' 1");
}

#[test]
fn text_and_bytes_agree_on_ascii() {
    let input = "The Rain In Spain";
    assert_eq!(
        most_common_char(input).unwrap(),
        most_common_byte(input.as_bytes()).unwrap()
    );
}

#[test]
fn accented_text_is_rejected() {
    let err = most_common_char("café").unwrap_err();
    assert_eq!(
        err,
        CountError::InputRange {
            position: 3,
            code_point: 0xE9,
        }
    );
    assert_eq!(
        err.to_string(),
        "Character U+00E9 at byte offset 3 is outside the 7-bit ASCII range"
    );
}

#[test]
fn invalid_utf8_bytes_are_rejected() {
    let err = most_common_byte(b"abc\xFF").unwrap_err();
    assert_eq!(
        err,
        CountError::InputRange {
            position: 3,
            code_point: 0xFF,
        }
    );
}

#[test]
fn multi_byte_character_is_rejected_by_leading_byte() {
    let err = most_common_byte("\u{e9}".as_bytes()).unwrap_err();
    assert_eq!(
        err,
        CountError::InputRange {
            position: 0,
            code_point: 0xC3,
        }
    );
}
