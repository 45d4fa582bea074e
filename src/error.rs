use thiserror::Error;

/// Every way a submission or lookup can fail.
///
/// The transport layer maps these onto status codes with a single exhaustive `match`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// A required field was absent (or `null`) in the submitted receipt.
    #[error("Parameter {0} is required for this request")]
    MissingField(String),

    /// A field was present but could not be parsed.
    #[error("Incorrect value for parameter: {0}")]
    InvalidField(String),

    /// No receipt has been stored under this id.
    #[error("No 'receipts' found for Id: '{0}'")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReceiptError {
    pub fn missing(field: &str) -> Self {
        ReceiptError::MissingField(field.to_string())
    }

    pub fn invalid(field: &str) -> Self {
        ReceiptError::InvalidField(field.to_string())
    }

    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ReceiptError::Internal(_))
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
