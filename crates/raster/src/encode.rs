use std::{
    fs::File,
    io::{BufWriter, Write},
    ops::{Deref, DerefMut},
    path::Path,
};

use log::info;

use crate::{Canvas, Error};

/// Encodes the canvas as an 8-bit RGBA PNG.
pub fn write_png<T, W>(canvas: &Canvas<T>, writer: W) -> Result<(), Error>
where
    T: Deref<Target = [u8]> + DerefMut,
    W: Write,
{
    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.bytes())?;
    writer.finish()?;
    Ok(())
}

/// Writes the canvas to `path` as a PNG file.
pub fn save_png<T>(canvas: &Canvas<T>, path: impl AsRef<Path>) -> Result<(), Error>
where
    T: Deref<Target = [u8]> + DerefMut,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    write_png(canvas, BufWriter::new(file))?;

    info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
