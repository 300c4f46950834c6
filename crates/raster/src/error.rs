#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("frame holds {actual} bytes, expected {expected} for the requested size")]
    FrameSize { expected: usize, actual: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("png encoding error: {0}")]
    Png(#[from] png::EncodingError),
}
