use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Two favourites share an id, so chapters can't be attributed.
    #[display("duplicate favourite id {_0}")]
    DuplicateEntry(#[error(not(source))] i64),
}

impl ErrorKind {
    pub fn is_retryable(&self) -> bool {
        false
    }
}
