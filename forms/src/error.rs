use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::{entities::submission::ValidationError, error::StoreError};
use derive_more::{Display, Error};
use serde::Serialize;

#[derive(Debug, Display, Error)]
pub enum Error {
    Validation(ValidationError),
    #[display(fmt = "Invalid request body: {}", _0)]
    Payload(serde_json::Error),
    #[display(fmt = "Database connection error: {}", _0)]
    Connection(StoreError),
    Persistence(StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::Payload(_) => StatusCode::BAD_REQUEST,
            Error::Connection(err) | Error::Persistence(err) if err.is_network() => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Error::Connection(_) | Error::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Error::Validation(err) => ErrorBody {
                message: err.to_string(),
                error: None,
            },
            Error::Payload(_) => ErrorBody {
                message: "Invalid request body".to_string(),
                error: Some(self.to_string()),
            },
            Error::Connection(_) | Error::Persistence(_) => ErrorBody {
                message: "Error submitting form".to_string(),
                error: Some(self.to_string()),
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
