use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("byte source exceeds buffer ceiling of {ceiling} bytes (read {read})")]
    CeilingExceeded { ceiling: usize, read: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
