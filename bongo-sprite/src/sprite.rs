//! ASCII art sprites.
//!
//! One raster row per line. `#`, `X` and `1` are lit; `.`, `0` and space are unlit. Lines
//! starting with `;` are comments. Trailing unlit cells may be omitted; the sprite is as wide
//! as its widest row.

use crate::SpriteError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u16, y: u16) -> bool {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u16, y: u16, on: bool) {
        let i = self.index(x, y);
        self.pixels[i] = on;
    }

    pub fn get_index(&self, index: usize) -> bool {
        self.pixels[index]
    }

    pub fn set_index(&mut self, index: usize, on: bool) {
        self.pixels[index] = on;
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside sprite");
        y as usize * self.width as usize + x as usize
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|on| if *on { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

fn cell(c: char) -> Option<bool> {
    match c {
        '#' | 'X' | '1' => Some(true),
        '.' | '0' | ' ' => Some(false),
        _ => None,
    }
}

pub fn parse(src: &str) -> Result<Bitmap, SpriteError> {
    // Each row remembers whether its line was blank.
    let mut rows: Vec<(Vec<bool>, bool)> = Vec::new();
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']);
        let blank = text.trim().is_empty();
        if text.starts_with(';') || (blank && rows.is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(text.len());
        for (i, c) in text.char_indices() {
            match cell(c) {
                Some(on) => row.push(on),
                None => {
                    return Err(SpriteError::new(
                        format!("Unexpected character {c:?} in sprite"),
                        start + i..start + i + c.len_utf8(),
                    ))
                }
            }
        }
        rows.push((row, blank));
    }

    while rows.last().is_some_and(|(_, blank)| *blank) {
        rows.pop();
    }

    if rows.is_empty() {
        return Err(SpriteError::unspanned("Sprite has no rows"));
    }

    let width = rows.iter().map(|(r, _)| r.len()).max().unwrap_or(0);
    if width == 0 {
        return Err(SpriteError::unspanned("Sprite has no columns"));
    }
    if width * rows.len() > bongo_common::frame::MAX_RASTER_LEN {
        return Err(SpriteError::unspanned(format!(
            "Sprite {}x{} is too large for a pixel frame",
            width,
            rows.len()
        )));
    }

    let mut bitmap = Bitmap::new(width as u16, rows.len() as u16);
    for (y, (row, _)) in rows.iter().enumerate() {
        for (x, on) in row.iter().enumerate() {
            bitmap.set(x as u16, y as u16, *on);
        }
    }
    log::debug!(
        "parsed {}x{} sprite, {} lit",
        bitmap.width,
        bitmap.height,
        bitmap.lit_count()
    );
    Ok(bitmap)
}

#[cfg(test)]
#[path = "sprite_test.rs"]
mod test;
