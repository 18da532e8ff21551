use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no snowball stemmer for language `{0}`")]
    UnsupportedLanguage(String),
    #[error("could not stem `{token}`: {reason}")]
    Stem { token: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
