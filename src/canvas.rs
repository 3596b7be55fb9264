use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::Color;
use crate::error::{CanvasError, Result};

pub const GRID_LINE_COLOR: Color = Color::BLACK;

/// A grid of colored cells, each drawn as a `cell_size` square block of pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    cell_size: u32,
    background: Color,
    cells: Vec<Vec<Color>>, // cells[row][column]
}

impl Canvas {
    pub fn new(width: u32, height: u32, cell_size: u32, background: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cell_size: cell_size.max(1),
            background,
            cells: vec![vec![background; width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Size of the rendered canvas in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }

    fn index(&self, column: i32, row: i32) -> Option<(usize, usize)> {
        if column < 0 || row < 0 || column as u32 >= self.width || row as u32 >= self.height {
            return None;
        }
        Some((row as usize, column as usize))
    }

    pub fn cell(&self, column: i32, row: i32) -> Option<Color> {
        self.index(column, row).map(|(r, c)| self.cells[r][c])
    }

    /// Maps a pixel position to the cell under it. Division truncates toward zero.
    pub fn cell_at(&self, px: i32, py: i32) -> (i32, i32) {
        let size = self.cell_size as i32;
        (px / size, py / size)
    }

    /// Out-of-range coordinates are ignored.
    pub fn paint(&mut self, column: i32, row: i32, color: Color) {
        if let Some((r, c)) = self.index(column, row) {
            self.cells[r][c] = color;
        }
    }

    pub fn erase(&mut self, column: i32, row: i32) {
        self.paint(column, row, self.background);
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(self.background);
        }
    }

    /// Replaces the grid with a fresh one filled with the background color.
    pub fn resize(&mut self, width: u32, height: u32, cell_size: u32) {
        log::debug!("Resizing canvas to {}x{} cells at {}px", width, height, cell_size);
        *self = Canvas::new(width, height, cell_size, self.background);
    }

    /// Re-colors every cell still holding the old background, then swaps the background.
    pub fn set_background(&mut self, color: Color) {
        let previous = self.background;
        for cell in self.cells.iter_mut().flatten() {
            if *cell == previous {
                *cell = color;
            }
        }
        self.background = color;
    }

    pub fn to_image(&self, include_grid_lines: bool) -> RgbImage {
        let (pixel_width, pixel_height) = self.pixel_size();
        let size = self.cell_size;

        // Neighboring cells share one line; the last column and row close the outer edge.
        ImageBuffer::from_fn(pixel_width, pixel_height, |x, y| {
            let on_border = x % size == 0 || y % size == 0 || x == pixel_width - 1 || y == pixel_height - 1;
            let color = if include_grid_lines && on_border {
                GRID_LINE_COLOR
            } else {
                self.cells[(y / size) as usize][(x / size) as usize]
            };
            Rgb::from(color)
        })
    }

    /// Loads cell colors from an image, sampling each cell's top-left pixel.
    /// The canvas is left untouched when the image size does not match.
    pub fn from_image(&mut self, image: &RgbImage) -> Result<()> {
        let (expected_width, expected_height) = self.pixel_size();
        if image.dimensions() != (expected_width, expected_height) {
            return Err(CanvasError::DimensionMismatch {
                expected_width,
                expected_height,
                actual_width: image.width(),
                actual_height: image.height(),
            });
        }

        let size = self.cell_size;
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (column, cell) in cells.iter_mut().enumerate() {
                *cell = (*image.get_pixel(column as u32 * size, row as u32 * size)).into();
            }
        }
        Ok(())
    }
}
