//! Image import/export boundary.
//!
//! The core only knows [`Picture`]s; this module turns encoded image files
//! into pictures and back, and collects files dropped onto the window.

use std::io::Cursor;
use std::path::Path;

use egui;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::error::{EditorError, FileResult};
use crate::picture::{Color, Picture};

/// Wraps a decoded image as a picture, cropped to `max` cells per axis.
/// Alpha is discarded.
pub fn picture_from_image(image: &DynamicImage, max: usize) -> Result<Picture, EditorError> {
    let rgb = image.to_rgb8();
    let width = (rgb.width() as usize).min(max);
    let height = (rgb.height() as usize).min(max);
    if width == 0 || height == 0 {
        return Err(EditorError::InvalidDimensions { width, height });
    }
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Color::from(rgb.get_pixel(x as u32, y as u32).0));
        }
    }
    Picture::from_pixels(width, height, pixels)
}

/// One image pixel per cell.
pub fn picture_to_image(picture: &Picture) -> RgbImage {
    let width = picture.width();
    let pixels = picture.pixels();
    RgbImage::from_fn(picture.width() as u32, picture.height() as u32, |x, y| {
        Rgb(pixels[x as usize + y as usize * width].to_array())
    })
}

pub fn decode_picture(bytes: &[u8], max: usize) -> FileResult<Picture> {
    let image = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", image.width(), image.height());
    Ok(picture_from_image(&image, max)?)
}

pub fn load_picture(path: impl AsRef<Path>, max: usize) -> FileResult<Picture> {
    let path = path.as_ref();
    log::info!("Loading picture from {}", path.display());
    decode_picture(&std::fs::read(path)?, max)
}

pub fn encode_png(picture: &Picture) -> FileResult<Vec<u8>> {
    let mut bytes = Vec::new();
    picture_to_image(picture).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn save_png(picture: &Picture, path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    picture_to_image(picture).save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "Saved {}x{} picture to {}",
        picture.width(),
        picture.height(),
        path.display()
    );
    Ok(())
}

/// Collects image files dropped onto the window.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up files dropped this frame. Returns true if there are any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decodes the dropped files. Failures are logged and skipped.
    pub fn take_pictures(&mut self, max: usize) -> Vec<Picture> {
        std::mem::take(&mut self.dropped_files)
            .iter()
            .filter_map(|file| {
                let name = file_name(file);
                match Self::read_dropped(file, max) {
                    Ok(picture) => {
                        log::info!(
                            "Imported {name} as {}x{} picture",
                            picture.width(),
                            picture.height()
                        );
                        Some(picture)
                    }
                    Err(err) => {
                        log::error!("Failed to import {name}: {err}");
                        None
                    }
                }
            })
            .collect()
    }

    fn read_dropped(file: &egui::DroppedFile, max: usize) -> FileResult<Picture> {
        if let Some(bytes) = &file.bytes {
            return decode_picture(bytes, max);
        }
        read_dropped_path(file, max)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_dropped_path(file: &egui::DroppedFile, max: usize) -> FileResult<Picture> {
    match &file.path {
        Some(path) => load_picture(path, max),
        None => Err(no_data()),
    }
}

// Browsers never hand out paths.
#[cfg(target_arch = "wasm32")]
fn read_dropped_path(_file: &egui::DroppedFile, _max: usize) -> FileResult<Picture> {
    Err(no_data())
}

fn no_data() -> crate::error::FileError {
    std::io::Error::new(std::io::ErrorKind::NotFound, "dropped file has no accessible data").into()
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}
