use std::{collections::VecDeque, path::Path};

use crate::math::{Spectrum, Vec2};

/// The settings for a `Film`.
#[derive(Debug, Copy, Clone)]
pub struct FilmSettings {
    /// The total film resolution.
    pub res: Vec2<u16>,
    /// Value the pixel buffer starts out as
    pub clear_color: Spectrum<f32>,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            res: Vec2::new(640, 480),
            clear_color: Spectrum::zeros(),
        }
    }
}

/// A full-width band of film rows used as the unit of render work
///
/// Tiles never overlap, so workers fill them without synchronizing and the
/// film copies each one back in a single splice.
#[derive(Debug, Clone)]
pub struct FilmTile {
    /// First row of the tile
    pub y_min: u16,
    /// One past the last row of the tile
    pub y_max: u16,
    /// Film width in pixels
    pub width: u16,
    /// Pixel values in this tile stored in row-major RGB order.
    pub pixels: Vec<Spectrum<f32>>,
}

impl FilmTile {
    /// Creates a new `FilmTile` covering rows `[y_min, y_max)`.
    pub fn new(width: u16, y_min: u16, y_max: u16, clear_color: Spectrum<f32>) -> Self {
        debug_assert!(y_min < y_max);

        Self {
            y_min,
            y_max,
            width,
            pixels: vec![clear_color; width as usize * (y_max - y_min) as usize],
        }
    }
}

/// Pixel wrapper for rendering through [FilmTile]s.
///
/// Pixels are stored row-major with the origin at the top left.
pub struct Film {
    res: Vec2<u16>,
    pixels: Vec<Spectrum<f32>>,
}

impl Film {
    /// Creates a new `Film` cleared to the settings' clear color.
    pub fn new(settings: FilmSettings) -> Self {
        Self {
            res: settings.res,
            pixels: vec![
                settings.clear_color;
                settings.res.x as usize * settings.res.y as usize
            ],
        }
    }

    /// Returns the resolution of the currently stored pixels of this `Film`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns a reference to the pixels of this `Film`.
    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    /// Splits this `Film` into row-band tiles of at most `tile_rows` rows,
    /// in top-to-bottom order.
    pub fn tiles(&self, tile_rows: u16) -> VecDeque<FilmTile> {
        debug_assert!(tile_rows > 0);

        let mut tiles = VecDeque::new();
        let mut y = 0;
        while y < self.res.y {
            let y_max = (y + tile_rows).min(self.res.y);
            tiles.push_back(FilmTile::new(self.res.x, y, y_max, Spectrum::zeros()));
            y = y_max;
        }
        tiles
    }

    /// Writes a rendered tile back into the pixel buffer.
    pub fn update_tile(&mut self, tile: &FilmTile) {
        assert!(tile.width == self.res.x, "Tile width doesn't match film");
        assert!(tile.y_max <= self.res.y, "Tile rows outside film");

        let start = tile.y_min as usize * self.res.x as usize;
        self.pixels[start..start + tile.pixels.len()].copy_from_slice(&tile.pixels);
    }

    /// Returns the pixels as interleaved 8bit RGB, clamped to the displayable
    /// range.
    pub fn rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            let c = pixel.clamped(0.0, 1.0) * 255.0;
            bytes.push(c.r as u8);
            bytes.push(c.g as u8);
            bytes.push(c.b as u8);
        }
        bytes
    }
}

/// Writes the film out as a PNG file.
pub fn write_png(film: &Film, path: &Path) -> crate::Result<()> {
    let res = film.res();
    let image = image::RgbImage::from_raw(u32::from(res.x), u32::from(res.y), film.rgb8())
        .ok_or("Pixel buffer does not match film resolution")?;
    image.save(path)?;

    log::info!("PNG written to '{}'", path.display());
    Ok(())
}
