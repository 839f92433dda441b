use std::{
    error,
    fmt::{self, Display},
};

#[derive(Debug)]
pub enum Error {
    InvalidUrl { url: String, message: String },
    Transport { url: String, source: hyper::Error },
    Decode(serde_json::Error),
    Configuration(String),
}

impl Error {
    pub fn invalid_url(url: impl Into<String>, message: impl Display) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn transport(url: impl Into<String>, source: hyper::Error) -> Self {
        Self::Transport { url: url.into(), source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidUrl { url, message } => write!(f, r#"Invalid url "{}": {}"#, url, message),
            Self::Transport { url, source } => write!(f, "Request to {} failed: {}", url, source),
            Self::Decode(error) => write!(f, "Invalid JSON response: {}", error),
            Self::Configuration(message) => write!(f, "{}", message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Decode(error) => Some(error),
            Self::InvalidUrl { .. } | Self::Configuration(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}
