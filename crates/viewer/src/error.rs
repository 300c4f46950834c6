#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Args(String),
    #[error(transparent)]
    Fractal(#[from] fractals::Error),
    #[error(transparent)]
    Raster(#[from] raster::Error),
    #[error(transparent)]
    Shell(#[from] shell::Error),
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("surface texture error: {0}")]
    Texture(#[from] pixels::TextureError),
}
