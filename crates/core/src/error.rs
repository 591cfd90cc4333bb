use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The qds script '{}' already exists. Try using another name", _0)]
    AlreadyExists(String),

    #[error("No such script '{}' exists", _0)]
    EntryNotFound(String),

    #[error("The script file for '{}' does not exist", _0)]
    ScriptNotFound(String),

    #[error("{}", _0)]
    Validation(String),

    #[error("Error loading script '{}': {}", .name, .reason)]
    Load { name: String, reason: String },

    #[error("The script '{}' failed: {}", .name, .detail)]
    Invocation { name: String, detail: String },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invocation(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Invocation {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }
}
