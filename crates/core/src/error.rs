use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Prompt error: {}", .0)]
    Prompt(String),
}

impl Error {
    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
