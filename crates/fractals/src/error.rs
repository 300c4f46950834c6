use crate::FractalKind;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The request carried the wrong number of seed points for its kind.
    #[error("{kind} expects {expected} seed points, got {actual}")]
    MalformedSeed {
        kind: FractalKind,
        expected: &'static str,
        actual: usize,
    },
    #[error("unknown fractal kind '{0}'")]
    UnknownKind(String),
}
