use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// An opaque RGB color.
///
/// Serialized as a `#rrggbb` string, which is also what the color picker
/// boundary speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Neutral light background used for fresh pictures.
    pub const LIGHT_GRAY: Color = Color::rgb(0xf0, 0xf0, 0xf0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("expected #rrggbb, got {value:?}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// A pointer position in cell coordinates. May lie outside the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single cell assignment produced by a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

impl Edit {
    pub const fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Immutable, row-major grid of colors.
///
/// Cloning is cheap: clones share the same pixel buffer, which also lets
/// observers use [`Picture::same_as`] as a "nothing changed" fast path.
#[derive(Debug, Clone)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Arc<[Color]>,
}

impl Picture {
    /// A `width` x `height` picture filled with `color`.
    pub fn empty(width: usize, height: usize, color: Color) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; width * height].into(),
        })
    }

    /// Wraps a row-major pixel buffer, e.g. a decoded image.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        if pixels.len() != width * height {
            return Err(EditorError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    /// Converts a pointer position into in-bounds cell coordinates.
    pub fn cell(&self, pos: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color, EditorError> {
        if x >= self.width || y >= self.height {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[x + y * self.width])
    }

    /// Row-major view of every cell.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// A new picture equal to this one except at the edited cells.
    ///
    /// Later edits win over earlier ones for the same cell. Edits outside the
    /// picture are ignored.
    pub fn with_edits(&self, edits: &[Edit]) -> Picture {
        if edits.is_empty() {
            return self.clone();
        }
        let mut pixels = self.pixels.to_vec();
        for edit in edits {
            if edit.x < self.width && edit.y < self.height {
                pixels[edit.x + edit.y * self.width] = edit.color;
            }
        }
        Picture {
            width: self.width,
            height: self.height,
            pixels: pixels.into(),
        }
    }

    /// True when both pictures share the same pixel buffer.
    pub fn same_as(&self, other: &Picture) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Picture {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
            || (self.dimensions() == other.dimensions() && self.pixels == other.pixels)
    }
}

impl Eq for Picture {}

fn check_dimensions(width: usize, height: usize) -> Result<(), EditorError> {
    if width == 0 || height == 0 {
        return Err(EditorError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn test_empty_picture_is_filled() {
        let picture = Picture::empty(3, 2, Color::WHITE).unwrap();
        assert_eq!(picture.dimensions(), (3, 2));
        assert!(picture.pixels().iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Picture::empty(0, 4, Color::WHITE),
            Err(EditorError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(Picture::from_pixels(2, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_pixel_count_must_match() {
        let result = Picture::from_pixels(2, 2, vec![RED; 3]);
        assert!(matches!(result, Err(EditorError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_pixel_at_bounds() {
        let picture = Picture::empty(4, 3, Color::WHITE).unwrap();
        assert_eq!(picture.pixel_at(3, 2), Ok(Color::WHITE));
        assert_eq!(
            picture.pixel_at(4, 0),
            Err(EditorError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(picture.pixel_at(0, 3).is_err());
    }

    #[test]
    fn test_with_edits_leaves_receiver_untouched() {
        let picture = Picture::empty(2, 2, Color::WHITE).unwrap();
        let edited = picture.with_edits(&[Edit::new(1, 0, RED)]);
        assert_eq!(edited.pixel_at(1, 0), Ok(RED));
        assert_eq!(picture.pixel_at(1, 0), Ok(Color::WHITE));
        assert!(!edited.same_as(&picture));
    }

    #[test]
    fn test_last_edit_wins() {
        let picture = Picture::empty(2, 2, Color::WHITE).unwrap();
        let edited = picture.with_edits(&[Edit::new(0, 1, RED), Edit::new(0, 1, BLUE)]);
        assert_eq!(edited.pixel_at(0, 1), Ok(BLUE));
    }

    #[test]
    fn test_out_of_range_edits_ignored() {
        let picture = Picture::empty(2, 2, Color::WHITE).unwrap();
        let edited = picture.with_edits(&[Edit::new(5, 5, RED)]);
        assert_eq!(edited, picture);
    }

    #[test]
    fn test_cell_conversion() {
        let picture = Picture::empty(3, 3, Color::WHITE).unwrap();
        assert_eq!(picture.cell(Position::new(2, 1)), Some((2, 1)));
        assert_eq!(picture.cell(Position::new(-1, 1)), None);
        assert_eq!(picture.cell(Position::new(1, 3)), None);
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Color::from_hex("#f0a0ff"), Some(Color::rgb(0xf0, 0xa0, 0xff)));
        assert_eq!(Color::from_hex("000000"), Some(Color::BLACK));
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
        assert_eq!(Color::from_hex("#+1+1+1"), None);
    }

    #[test]
    fn test_color_serde_as_hex() {
        let json = serde_json::to_string(&RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RED);
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
