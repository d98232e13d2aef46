use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please upload an image before analyzing.")]
    MissingImage,

    #[error("Unsupported image type: {0}. Please upload a JPEG or PNG image.")]
    UnsupportedImageType(String),

    #[error("Gemini API error: {0}")]
    RemoteCall(String),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn remote_call(msg: impl Into<String>) -> Self {
        Self::RemoteCall(msg.into())
    }

    /// HTTP status this error maps to at the API boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingImage => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedImageType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::RemoteCall(_) | Self::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message rendered in the page's error region. Input problems keep
    /// their fixed user-facing wording; everything else is reported as a
    /// generic "Error: ..." carrying the underlying detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingImage | Self::UnsupportedImageType(_) => self.to_string(),
            other => format!("Error: {other}"),
        }
    }
}
