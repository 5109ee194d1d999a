//! RGB color value voted on during region smoothing

use std::fmt;
use std::str::FromStr;

use crate::io::error::{RegionError, invalid_argument};

/// Three 8-bit channel intensities compared exactly, channel by channel
///
/// Values are immutable; a new `Color` is built rather than mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Zero color every map cell starts with
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure yellow, the first color of the default palette
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Pure green, the second color of the default palette
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Create a color from its channel intensities
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red channel intensity
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel intensity
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel intensity
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Channels in R, G, B order
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Channels in B, G, R order
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = RegionError;

    /// Parses `#rrggbb`, `rrggbb` or `r,g,b`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();

        if trimmed.contains(',') {
            return parse_decimal_triple(trimmed);
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid_argument(
                "color",
                &text,
                &"expected #rrggbb, rrggbb or r,g,b",
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| invalid_argument("color", &text, &"invalid hexadecimal digits"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

fn parse_decimal_triple(text: &str) -> Result<Color, RegionError> {
    let channels = text
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid_argument("color", &text, &e))?;

    match channels.as_slice() {
        &[red, green, blue] => Ok(Color::new(red, green, blue)),
        _ => Err(invalid_argument(
            "color",
            &text,
            &"expected exactly three channels",
        )),
    }
}
