use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Note not found: {0}")]
    NoteNotFound(usize),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("A note titled \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("Vault is full ({0} notes)")]
    VaultFull(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, VaultError>;
