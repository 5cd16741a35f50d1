//! File-based image decoding.
//!
//! Wraps the `image` crate: any format it recognizes by content or extension
//! is decoded and normalized to 8-bit RGB.

use crate::model::{Extent, Grid, RawImage, Rgb, SourceError};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// An image file on disk that has not been decoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source for the file at `path`. Nothing is read until decoding.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name shown in the header: the final path component, or the whole path
    /// when there is none.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Decode the file.
    ///
    /// # Errors
    ///
    /// - `SourceError::Decode` if the file is missing, unreadable or not an
    ///   image the decoder understands
    /// - `SourceError::Empty` if the image has zero width or height
    /// - `SourceError::Allocation` if pixel storage cannot be reserved
    pub fn decode(&self) -> Result<RawImage, SourceError> {
        let image = image::open(&self.path).map_err(|source| SourceError::Decode {
            path: self.path.clone(),
            source,
        })?;
        self.normalize(image)
    }

    /// Normalize an already decoded image.
    pub(crate) fn normalize(&self, image: DynamicImage) -> Result<RawImage, SourceError> {
        let channels = image.color().channel_count();
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(SourceError::Empty(self.path.clone()));
        }

        let extent = Extent::new(width as usize, height as usize);
        let pixels = Grid::try_from_fn(extent, |col, row| {
            let [red, green, blue] = rgb.get_pixel(col as u32, row as u32).0;
            Rgb::new(red, green, blue)
        })
        .map_err(|_| SourceError::Allocation(self.path.clone()))?;

        Ok(RawImage::new(pixels, channels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::env;
    use std::fs;

    #[test]
    fn display_name_uses_file_name() {
        let source = FileSource::new("/tmp/pictures/cat.png");
        assert_eq!(source.display_name(), "cat.png");
    }

    #[test]
    fn display_name_falls_back_to_path() {
        let source = FileSource::new("/");
        assert_eq!(source.display_name(), "/");
    }

    #[test]
    fn decode_missing_file_is_decode_error() {
        let source = FileSource::new("/nonexistent/glyphview/missing.png");
        assert!(matches!(source.decode(), Err(SourceError::Decode { .. })));
    }

    #[test]
    fn decode_non_image_is_decode_error() {
        let path = env::temp_dir().join("glyphview_test_not_an_image.png");
        fs::write(&path, b"definitely not a png").expect("write test file");

        let result = FileSource::new(&path).decode();
        assert!(matches!(result, Err(SourceError::Decode { .. })));

        fs::remove_file(path).ok();
    }

    #[test]
    fn decode_png_round_trips_pixels() {
        let path = env::temp_dir().join("glyphview_test_decode.png");
        let mut img = ImageBuffer::new(3, 2);
        img.put_pixel(0, 0, image::Rgb([255u8, 0, 0]));
        img.put_pixel(2, 1, image::Rgb([0u8, 0, 255]));
        img.save(&path).expect("save test png");

        let raw = FileSource::new(&path).decode().expect("decode test png");
        assert_eq!(raw.extent(), Extent::new(3, 2));
        assert_eq!(raw.channels(), 3);
        assert_eq!(raw.pixels()[(0, 0)], Rgb::new(255, 0, 0));
        assert_eq!(raw.pixels()[(2, 1)], Rgb::new(0, 0, 255));
        assert_eq!(raw.pixels()[(1, 0)], Rgb::new(0, 0, 0));

        fs::remove_file(path).ok();
    }

    #[test]
    fn alpha_channel_is_dropped_but_counted() {
        let img = ImageBuffer::from_pixel(2, 2, Rgba([10u8, 20, 30, 128]));
        let raw = FileSource::new("mem.png")
            .normalize(DynamicImage::ImageRgba8(img))
            .unwrap();
        assert_eq!(raw.channels(), 4);
        assert_eq!(raw.pixels()[(1, 1)], Rgb::new(10, 20, 30));
    }

    #[test]
    fn zero_sized_image_is_empty_error() {
        let img: ImageBuffer<image::Rgb<u8>, Vec<u8>> = ImageBuffer::new(0, 0);
        let result = FileSource::new("empty.png").normalize(DynamicImage::ImageRgb8(img));
        assert!(matches!(result, Err(SourceError::Empty(_))));
    }
}
