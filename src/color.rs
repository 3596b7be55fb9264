use image::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
}

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry { name, color: Color::rgb(r, g, b) }
}

/// Colors selectable as the drawing color, in menu order.
pub const PALETTE: [PaletteEntry; 14] = [
    entry("black", 0, 0, 0),
    entry("white", 255, 255, 255),
    entry("red", 255, 0, 0),
    entry("green", 0, 255, 0),
    entry("blue", 0, 0, 255),
    entry("yellow", 255, 255, 0),
    entry("orange", 255, 165, 0),
    entry("purple", 128, 0, 128),
    entry("pink", 255, 192, 203),
    entry("cyan", 0, 255, 255),
    entry("magenta", 255, 0, 255),
    entry("gray", 128, 128, 128),
    entry("brown", 165, 42, 42),
    entry("lime", 50, 205, 50),
];
