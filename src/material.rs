use serde::Serialize;

use crate::config::COLOR_ATTRIBUTE_NAME;
use crate::document::MaterialRecord;
use crate::error::MaterialError;

/// Linear RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` and pairs it with `opacity` as alpha.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::MalformedColor`] unless the color is `#`
    /// followed by exactly six hex digits, and
    /// [`MaterialError::OpacityOutOfRange`] unless opacity is in `[0, 1]`.
    pub fn from_hex(color: &str, opacity: f64) -> Result<Self, MaterialError> {
        let malformed = || MaterialError::MalformedColor(color.to_string());
        let digits = color.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        if !(0.0..=1.0).contains(&opacity) {
            return Err(MaterialError::OpacityOutOfRange(opacity));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| malformed())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, opacity))
    }

    /// Converts a material record.
    ///
    /// # Errors
    ///
    /// See [`Rgba::from_hex`].
    pub fn from_material(material: &MaterialRecord) -> Result<Self, MaterialError> {
        Self::from_hex(&material.color, material.opacity)
    }

    /// Channels as an array.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A named color attribute with one entry per mesh vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAttribute {
    pub name: String,
    pub data: Vec<Rgba>,
}

impl ColorAttribute {
    /// Paints `vertex_count` vertices with the same color.
    #[must_use]
    pub fn uniform(color: Rgba, vertex_count: usize) -> Self {
        Self {
            name: COLOR_ATTRIBUTE_NAME.to_string(),
            data: vec![color; vertex_count],
        }
    }
}
