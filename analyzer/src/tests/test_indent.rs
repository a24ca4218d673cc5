use crate::{Document, INDENT_BY, IndentUtil};

#[test]
fn indent_step_is_two() {
    assert_eq!(INDENT_BY, 2);
}

#[test]
fn add_newline_with_indent_appends_spaces() {
    let util = IndentUtil::default();
    let mut buf = String::from("a:");
    util.add_newline_with_indent(3, &mut buf);
    assert_eq!(buf, "a:\n   ");
}

#[test]
fn add_newline_uses_document_delimiter() {
    let util = IndentUtil::for_document(&Document::new("a: 1\r\n"));
    let mut buf = String::new();
    util.add_newline_with_indent(2, &mut buf);
    assert_eq!(buf, "\r\n  ");
}

#[test]
fn apply_indentation_skips_first_line() {
    let util = IndentUtil::default();
    assert_eq!(util.apply_indentation("a\nb\nc", 2), "a\n  b\n  c");
    assert_eq!(util.apply_indentation("single", 4), "single");
    assert_eq!(util.apply_indentation("a\nb", 0), "a\nb");
}

#[test]
fn apply_indentation_keeps_trailing_newline() {
    let util = IndentUtil::default();
    let out = util.apply_indentation("\n", 4);
    assert_eq!(out, "\n    ");
    assert_eq!(out.matches('\n').count(), 1);
    assert_eq!(util.apply_indentation("\n- ", 2), "\n  - ");
}
