use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::art_file;
use crate::canvas::Canvas;
use crate::color::{Color, PALETTE};
use crate::config::Config;
use crate::error::Result;

/// Tool selected for pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Draw,
    Eraser,
}

/// Owns the canvas and the drawing flags, one method per user action.
#[derive(Debug)]
pub struct Controller {
    canvas: Canvas,
    current_color: Color,
    palette_index: usize,
    tool: Tool,
    show_grid: bool,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        let palette_index = PALETTE
            .iter()
            .position(|entry| entry.color == config.draw_color)
            .unwrap_or(0);

        Self {
            canvas: Canvas::new(config.grid_size, config.grid_size, config.cell_size, config.background),
            current_color: config.draw_color,
            palette_index,
            tool: Tool::Draw,
            show_grid: config.show_grid,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Paints or erases the cell under the pointer, depending on the active tool.
    pub fn pointer_at(&mut self, px: i32, py: i32) {
        match self.tool {
            Tool::Draw => self.paint_at(px, py),
            Tool::Eraser => self.erase_at(px, py),
        }
    }

    /// Negative positions lie left of or above the canvas and hit no cell.
    fn cell_under(&self, px: i32, py: i32) -> Option<(i32, i32)> {
        if px < 0 || py < 0 {
            return None;
        }
        Some(self.canvas.cell_at(px, py))
    }

    pub fn paint_at(&mut self, px: i32, py: i32) {
        if let Some((column, row)) = self.cell_under(px, py) {
            self.canvas.paint(column, row, self.current_color);
        }
    }

    pub fn erase_at(&mut self, px: i32, py: i32) {
        if let Some((column, row)) = self.cell_under(px, py) {
            self.canvas.erase(column, row);
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool() {
            log::debug!("Tool: {:?}", tool);
        }
        self.tool = tool;
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Selects a palette slot; indexes past the end are ignored.
    pub fn select_palette(&mut self, index: usize) {
        if let Some(entry) = PALETTE.get(index) {
            self.palette_index = index;
            self.set_current_color(entry.color);
            log::info!("Color: {}", entry.name);
        }
    }

    pub fn next_color(&mut self) {
        self.select_palette((self.palette_index + 1) % PALETTE.len());
    }

    /// Cells still showing the old canvas color follow the new one.
    pub fn set_background(&mut self, color: Color) {
        log::debug!("Canvas color {:?} -> {:?}", self.canvas.background(), color);
        self.canvas.set_background(color);
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Square grid of `size` cells per edge at the default cell size.
    pub fn resize_to(&mut self, size: u32) {
        let cell_size = self.canvas.cell_size();
        self.canvas.resize(size, size, cell_size);
    }

    /// Square grid filling the shorter edge of a display of the given pixel size.
    pub fn fit_to_display(&mut self, display_width: u32, display_height: u32) {
        let size = (display_width.min(display_height) / self.canvas.cell_size()).max(1);
        self.resize_to(size);
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        art_file::save(&self.canvas, path)
    }

    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        art_file::load(&mut self.canvas, path)
    }

    /// The raster shown on screen.
    pub fn frame(&self) -> RgbImage {
        self.canvas.to_image(self.show_grid)
    }
}
