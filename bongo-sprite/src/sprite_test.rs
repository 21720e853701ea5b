use super::*;

#[test]
fn parse_rows() {
    let bitmap = parse(
        "; a 4x3 sprite
#..#
.XX
1 0.
",
    )
    .unwrap();

    assert_eq!((bitmap.width(), bitmap.height()), (4, 3));
    assert!(bitmap.get(0, 0));
    assert!(bitmap.get(3, 0));
    assert!(bitmap.get(1, 1));
    assert!(!bitmap.get(3, 1));
    assert!(bitmap.get(0, 2));
    assert!(!bitmap.get(2, 2));
    assert_eq!(bitmap.lit_count(), 5);
}

#[test]
fn leading_and_trailing_blank_lines_ignored() {
    let bitmap = parse("\n\n#.\n.#\n\n\n").unwrap();

    assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
}

#[test]
fn whitespace_only_edge_lines_ignored() {
    let bitmap = parse("   \n#.\n.#\n   \n  \n").unwrap();

    assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
    assert_eq!(bitmap.to_ascii(), "#.\n.#\n");
}

#[test]
fn blank_line_inside_is_unlit_row() {
    let bitmap = parse("#\n\n#\n").unwrap();

    assert_eq!(bitmap.height(), 3);
    assert!(!bitmap.get(0, 1));
}

#[test]
fn crlf_lines() {
    let bitmap = parse("#.\r\n.#\r\n").unwrap();

    assert_eq!(bitmap.to_ascii(), "#.\n.#\n");
}

#[test]
fn bad_character_has_span() {
    let err = parse("##\n#?\n").unwrap_err();

    assert_eq!(err.span, Some(4..5));
    assert_eq!(err.message, "Unexpected character '?' in sprite");
}

#[test]
fn empty_sprite() {
    assert_eq!(parse("").unwrap_err().message, "Sprite has no rows");
    assert_eq!(parse("; nothing\n").unwrap_err().message, "Sprite has no rows");
}

#[test]
fn set_and_get_by_index() {
    let mut bitmap = Bitmap::new(3, 2);
    bitmap.set_index(4, true);

    assert!(bitmap.get(1, 1));
    assert_eq!(bitmap.to_ascii(), "...\n.#.\n");
}
