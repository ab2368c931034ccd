use core::str::FromStr;

/// An 8-bit-per-channel RGBA color.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);
    pub const CLEAR: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

/// Error returned when parsing an [`Rgba`] from a hex string fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;

        let mut nibbles = [0u8; 8];
        let mut len = 0usize;
        for c in digits.chars() {
            let v = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            if len < nibbles.len() {
                nibbles[len] = v as u8;
            }
            len += 1;
        }

        let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];
        match len {
            3 => Ok(Self::rgb(
                nibbles[0] * 0x11,
                nibbles[1] * 0x11,
                nibbles[2] * 0x11,
            )),
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::new(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
