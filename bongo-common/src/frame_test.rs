use super::*;

extern crate std;
use std::vec::Vec;

#[test]
fn pixel_encoding() {
    let p = Pixel::decode(0x8220);
    assert_eq!(p, Pixel::new(0x220, true));
    assert_eq!(p.xy(32), (0, 17));
    assert_eq!(p.encode(), 0x8220);

    let p = Pixel::decode(0x0636);
    assert!(!p.on);
    assert_eq!(p.xy(32), (22, 49));

    assert_eq!(Pixel::at(22, 49, 32, false).encode(), 0x0636);
}

#[test]
fn validate_frames() {
    assert_eq!(validate(&[0], 4096), Ok(()));
    assert_eq!(validate(&[2, 0x8fff, 0x0001], 4096), Ok(()));
    assert_eq!(validate(&[], 4096), Err(FrameError::Empty));
    assert_eq!(
        validate(&[3, 1, 2], 4096),
        Err(FrameError::CountMismatch {
            declared: 3,
            actual: 2
        })
    );
    assert_eq!(
        validate(&[2, 1, 0x9000], 4096),
        Err(FrameError::OutOfRange {
            position: 2,
            index: 0x1000
        })
    );
}

#[test]
fn frame_pixels() {
    let frame = PixelFrame::checked(&[3, 0x8001, 0x0002, 0x8003], 16);
    assert_eq!(frame.len(), 3);
    assert!(!frame.is_empty());

    let on: Vec<bool> = frame.pixels().map(|p| p.on).collect();
    assert_eq!(on, [true, false, true]);

    assert!(PixelFrame::EMPTY.is_empty());
    assert_eq!(PixelFrame::EMPTY.pixels().count(), 0);
}

#[test]
fn unchecked_frame_is_clamped() {
    let frame = PixelFrame::new(&[5, 0x8001]);
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.pixels().count(), 1);

    assert_eq!(PixelFrame::new(&[]).len(), 0);
}

#[test]
#[should_panic(expected = "count does not match")]
fn checked_rejects_bad_count() {
    PixelFrame::checked(&[2, 0x8001], 16);
}

#[test]
fn error_display() {
    let msg = std::format!(
        "{}",
        FrameError::OutOfRange {
            position: 4,
            index: 5000
        }
    );
    assert_eq!(msg, "pixel index 5000 at word 4 is outside the raster");
}
