// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TbaError {
    /// TBA answered, but not with a 2xx.
    #[error("TBA returned status code {status} {reason}\n{body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not parse TBA response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("This script is only for 2022 Rapid React events! (got '{event_key}')")]
    UnsupportedEvent { event_key: String },

    #[error("Not overwriting {}", path.display())]
    OverwriteDeclined { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TbaError {
    /// Process exit code for this failure. API failures surface the HTTP
    /// status verbatim; everything else is a plain `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            TbaError::Http { status, .. } => i32::from(*status),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TbaError>;
