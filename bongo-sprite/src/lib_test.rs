use std::path::Path;

use super::*;

#[test]
fn location_of_span() {
    let src = "#..\n.#.\n..?\n";
    let err = SpriteError::new("bad", 10..11);

    assert_eq!(
        err.location(src),
        Some(Location {
            line: 3,
            col: 3,
            line_range: 8..11
        })
    );
}

#[test]
fn location_without_span() {
    let err = SpriteError::unspanned("no span");

    assert_eq!(err.location("abc"), None);
    assert_eq!(err.to_string(), "no span");
}

#[test]
fn display_includes_span() {
    assert_eq!(
        SpriteError::new("bad word", 3..7).to_string(),
        "bad word (bytes 3..7)"
    );
}

#[test]
fn long_format_points_at_column() {
    let src = "#.\n.x\n";
    let err = sprite::parse(src).unwrap_err();

    assert_eq!(
        err.long_format(Path::new("cat.txt"), src),
        "error: Unexpected character 'x' in sprite
 --> cat.txt:2:2
2 | .x
  |  ^"
    );
}

#[test]
fn long_format_without_span() {
    let err = SpriteError::unspanned("Sprite has no rows");

    assert_eq!(
        err.long_format(Path::new("cat.txt"), ""),
        "error: Sprite has no rows\n  in cat.txt"
    );
}

#[test]
fn char_span_counts_chars() {
    let src = "é;\nzz";
    let err = SpriteError::new("bad", 4..5);

    assert_eq!(err.char_span(src), Some(3..4));
}

#[test]
fn pretty_parse_table_returns_words() {
    let table = pretty_parse_table(Path::new("t.rs"), "const T: &[u16] = &[1, 0x8001];").unwrap();

    assert_eq!(table.words, vec![1, 0x8001]);
}

#[test]
fn pretty_parse_sprite_reports_error() {
    let err = pretty_parse_sprite(Path::new("s.txt"), "; only a comment\n").unwrap_err();

    assert_eq!(err.message, "Sprite has no rows");
    assert_eq!(err.span, None);
}
