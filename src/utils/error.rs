use thiserror::Error;

use crate::schema::ValidationErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Too many redirects: {0}")]
    TooManyRedirects(#[source] reqwest::Error),

    #[error("API request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("InfluxDB request failed: {0}")]
    Influx(#[from] influxdb2::RequestError),

    #[error("InfluxDB point construction failed: {0}")]
    InfluxPoint(#[from] influxdb2::models::data_point::DataPointError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Data processing error: {message}")]
    Processing { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

// Transport failures keep their kind instead of collapsing into one
// generic error, so callers can match on the cause.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else if err.is_redirect() {
            Error::TooManyRedirects(err)
        } else {
            Error::Request(err)
        }
    }
}
