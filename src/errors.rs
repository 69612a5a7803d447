use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by directory navigator operations.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("{0} is a folder (folder deletion is disabled)")]
    IsDirectory(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl NavError {
    /// True when the destination of a create or rename was already taken,
    /// whether we detected it ourselves or the OS reported it.
    pub fn is_collision(&self) -> bool {
        match self {
            NavError::AlreadyExists(_) => true,
            NavError::Io(e) => e.kind() == io::ErrorKind::AlreadyExists,
            _ => false,
        }
    }
}

pub type NavResult<T> = Result<T, NavError>;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
