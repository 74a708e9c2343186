use std::fmt;

/// Opaque 8-bit RGB color.
///
/// Channels are stored as straight sRGB bytes; no color management is applied
/// between sampling and encoding.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive).
    ///
    /// The three-digit form doubles each digit, so `#a3f` is `#aa33ff`.
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let digits = src.strip_prefix('#').unwrap_or(src);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(
                src,
                format!("unexpected character {bad:?}, expected hex digits"),
            ));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|e| ColorParseError::new(src, e.to_string()));

        match digits.len() {
            6 => Ok(Color::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let double = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Color::new(double(0)?, double(1)?, double(2)?))
            }
            n => Err(ColorParseError::new(
                src,
                format!("expected 3 or 6 hex digits, got {n}"),
            )),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

/// A hex color literal that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
    pub message: String,
}

impl ColorParseError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self { input: input.to_owned(), message: message.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}
