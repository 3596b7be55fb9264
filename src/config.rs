use crate::color::Color;

pub const SMALL_GRID: u32 = 20;
pub const MEDIUM_GRID: u32 = 30;
pub const LARGE_GRID: u32 = 40;

/// Startup defaults for the canvas and the drawing tools.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub grid_size: u32,
    pub cell_size: u32,
    pub background: Color,
    pub draw_color: Color,
    pub show_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Pixellate".to_string(),
            grid_size: MEDIUM_GRID,
            cell_size: 20,
            background: Color::WHITE,
            draw_color: Color::BLACK,
            show_grid: true,
        }
    }
}
