use crate::sprite::parse;

use super::*;

#[test]
fn base_lists_lit_pixels() {
    let base = parse("#..\n..#\n").unwrap();

    assert_eq!(base_frame(&base), vec![2, 0x8000, 0x8005]);
}

#[test]
fn diff_lists_changed_pixels_only() {
    let base = parse("##.\n...\n").unwrap();
    let pose = parse("#..\n.#.\n").unwrap();

    assert_eq!(diff_frame(&base, &pose).unwrap(), vec![2, 0x0001, 0x8004]);
}

#[test]
fn identical_pose_is_empty_diff() {
    let base = parse("#.\n.#\n").unwrap();

    assert_eq!(diff_frame(&base, &base).unwrap(), vec![0]);
}

#[test]
fn dimension_mismatch() {
    let base = parse("#.\n.#\n").unwrap();
    let pose = parse("#..\n.#.\n").unwrap();

    assert_eq!(
        diff_frame(&base, &pose).unwrap_err().message,
        "Pose is 3x2 but the base sprite is 2x2"
    );
}

#[test]
fn applying_diff_over_base_reproduces_pose() {
    let base = parse("##..\n.##.\n#..#\n").unwrap();
    let pose = parse("#..#\n.#..\n##.#\n").unwrap();

    let base_words = base_frame(&base);
    let diff_words = diff_frame(&base, &pose).unwrap();

    let mut drawn = Bitmap::new(4, 3);
    apply(&mut drawn, PixelFrame::new(&base_words)).unwrap();
    assert_eq!(drawn, base);
    apply(&mut drawn, PixelFrame::new(&diff_words)).unwrap();
    assert_eq!(drawn, pose);
}

#[test]
fn apply_rejects_out_of_range() {
    let mut bitmap = Bitmap::new(2, 2);

    let err = apply(&mut bitmap, PixelFrame::new(&[2, 0x8001, 0x8004])).unwrap_err();
    assert_eq!(err.message, "Pixel index 4 at word 2 is outside the 2x2 raster");
}
