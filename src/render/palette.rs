//! Tile colors.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background colors for tiles 2, 4, 8, ... 2048, and everything above.
pub const PALETTE: [Rgb; 12] = [
    Rgb::new(0xee, 0xe4, 0xda), // 2
    Rgb::new(0xed, 0xe0, 0xc8), // 4
    Rgb::new(0xf2, 0xb1, 0x79), // 8
    Rgb::new(0xf5, 0x95, 0x63), // 16
    Rgb::new(0xf6, 0x7c, 0x5f), // 32
    Rgb::new(0xf6, 0x5e, 0x3b), // 64
    Rgb::new(0xed, 0xcf, 0x72), // 128
    Rgb::new(0xed, 0xcc, 0x61), // 256
    Rgb::new(0xed, 0xc8, 0x50), // 512
    Rgb::new(0xed, 0xc5, 0x3f), // 1024
    Rgb::new(0xed, 0xc2, 0x2e), // 2048
    Rgb::new(0x3c, 0x3a, 0x32), // 4096+
];

/// Palette slot for a tile: `log2(value) - 1`, clamped to the last entry.
///
/// Returns `None` for empty cells.
#[must_use]
pub const fn palette_index(value: u32) -> Option<usize> {
    if value == 0 {
        return None;
    }
    let exponent = value.ilog2() as usize;
    let index = exponent.saturating_sub(1);
    if index >= PALETTE.len() {
        Some(PALETTE.len() - 1)
    } else {
        Some(index)
    }
}

/// Palette color for a tile, `None` for empty cells.
#[must_use]
pub const fn tile_color(value: u32) -> Option<Rgb> {
    match palette_index(value) {
        Some(index) => Some(PALETTE[index]),
        None => None,
    }
}
