pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage lock poisoned by a panicking writer")]
    Poisoned,
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
