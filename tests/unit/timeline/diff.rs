use super::*;

#[test]
fn returns_the_appended_suffix() {
    assert_eq!(diff_inserted_text("ab", "abc").unwrap(), "c");
    assert_eq!(diff_inserted_text("", "xyz").unwrap(), "xyz");
    assert_eq!(diff_inserted_text("same", "same").unwrap(), "");
}

#[test]
fn multibyte_text_is_split_on_char_boundaries() {
    assert_eq!(diff_inserted_text("héllo", "héllo wörld").unwrap(), " wörld");
}

#[test]
fn non_prefix_is_a_non_linear_edit() {
    let err = diff_inserted_text("ab", "xyz").unwrap_err();
    assert!(matches!(
        err,
        CodecastError::NonLinearEdit {
            previous_len: 2,
            next_len: 3
        }
    ));
    assert!(diff_inserted_text("abc", "ab").is_err());
}
