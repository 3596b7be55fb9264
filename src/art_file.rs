//! PNG persistence for a canvas.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::error::Result;

/// Appends `.png` unless the path already ends with it (any case).
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Writes the canvas without grid lines and returns the path actually written.
pub fn save<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<PathBuf> {
    let path = with_png_extension(path.as_ref());
    canvas.to_image(false).save_with_format(&path, ImageFormat::Png)?;
    log::info!("Image saved successfully: {}", path.display());
    Ok(path)
}

pub fn load<P: AsRef<Path>>(canvas: &mut Canvas, path: P) -> Result<()> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgb8();
    canvas.from_image(&image)?;
    log::info!("Image loaded: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::CanvasError;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixellate-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_png_extension() {
        assert_eq!(with_png_extension(Path::new("art")), PathBuf::from("art.png"));
        assert_eq!(with_png_extension(Path::new("art.PNG")), PathBuf::from("art.PNG"));
        assert_eq!(with_png_extension(Path::new("art.jpg")), PathBuf::from("art.jpg.png"));
    }

    #[test]
    fn test_save_then_load() {
        let mut canvas = Canvas::new(3, 3, 20, Color::WHITE);
        canvas.paint(1, 1, Color::RED);

        let written = save(&canvas, temp_path("round-trip")).unwrap();
        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));

        let mut loaded = Canvas::new(3, 3, 20, Color::WHITE);
        load(&mut loaded, &written).unwrap();
        assert_eq!(loaded, canvas);

        std::fs::remove_file(written).ok();
    }

    #[test]
    fn test_save_then_load_non_square() {
        let mut canvas = Canvas::new(7, 4, 3, Color::WHITE);
        for row in 0..4 {
            for column in 0..7 {
                canvas.paint(column, row, Color::rgb(column as u8 * 36, row as u8 * 80, 200));
            }
        }

        let written = save(&canvas, temp_path("non-square")).unwrap();
        let mut loaded = Canvas::new(7, 4, 3, Color::BLACK);
        load(&mut loaded, &written).unwrap();
        assert_eq!(loaded.cell(6, 3), Some(Color::rgb(216, 240, 200)));
        for row in 0..4 {
            for column in 0..7 {
                assert_eq!(loaded.cell(column, row), canvas.cell(column, row));
            }
        }

        std::fs::remove_file(written).ok();
    }

    #[test]
    fn test_load_rejects_other_sizes() {
        let small = Canvas::new(5, 5, 20, Color::BLACK);
        let written = save(&small, temp_path("small.png")).unwrap();

        let mut canvas = Canvas::new(30, 30, 20, Color::WHITE);
        let before = canvas.clone();
        let err = load(&mut canvas, &written).unwrap_err();
        assert!(matches!(err, CanvasError::DimensionMismatch { .. }));
        assert_eq!(canvas, before);

        std::fs::remove_file(written).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let mut canvas = Canvas::new(3, 3, 20, Color::WHITE);
        let before = canvas.clone();
        let err = load(&mut canvas, temp_path("does-not-exist.png")).unwrap_err();
        assert!(matches!(err, CanvasError::IoFailure(_)));
        assert_eq!(canvas, before);
    }
}
