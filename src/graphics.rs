use image::RgbImage;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::color::Color;

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self { pixels, width, height })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Matches the framebuffer to the canvas raster size.
    pub fn resize_buffer(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        match self.pixels.resize_buffer(width, height) {
            Ok(()) => {
                self.width = width;
                self.height = height;
            }
            Err(err) => log::error!("Failed to resize buffer: {}", err),
        }
    }

    pub fn render(&mut self, image: &RgbImage) {
        self.resize_buffer(image.width(), image.height());

        let frame = self.pixels.frame_mut();
        for (pixel, source) in frame.chunks_exact_mut(4).zip(image.pixels()) {
            pixel.copy_from_slice(&Color::from(*source).to_rgba());
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    /// Window position to framebuffer pixel, `None` when the position falls in
    /// the margin around the buffer.
    pub fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Option<(i32, i32)> {
        self.pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()
            .map(|(x, y)| (x as i32, y as i32))
    }
}
