//! Image output: ASCII PPM and PNG.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::color_to_rgb;
use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write an image as plain-text PPM (P3), one RGB triple per line.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()
}

/// Save an image, choosing the format from the file extension.
///
/// `.png` is written through the `image` crate; anything else is PPM.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
            OutputError::BufferSize {
                width: image.width,
                height: image.height,
            },
        )?;
        buffer.save(path)?;
    } else {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
