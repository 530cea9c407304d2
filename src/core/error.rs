use thiserror::Error;

pub type SymResult<T> = Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Read out of data at offset {0}")]
    TruncatedRead(usize),
    #[error("Unknown symbol file format (magic {0:#010x})")]
    UnknownFormat(u32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
