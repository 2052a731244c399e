use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Connection to {url} failed, is the service running? ({source})")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    StatusError { status: u16, body: String },

    #[error("Response is missing fields: {}", .0.join(", "))]
    MissingFieldsError(Vec<String>),
}
