use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid address prefix: {0:?}")]
    AddressFormat(String),
}

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No WireGuard profile found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Profile store error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
