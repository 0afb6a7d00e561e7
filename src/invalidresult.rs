use crate::errorcontract::ErrorContract;

/// Returned when the payload of a failed contract is requested through a
/// guarded accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid result of contract: {error}")]
pub struct InvalidResultOfContract {
    error: ErrorContract,
}

impl InvalidResultOfContract {
    pub const fn new(error: ErrorContract) -> Self {
        InvalidResultOfContract { error }
    }

    pub const fn error(&self) -> &ErrorContract {
        &self.error
    }

    pub fn into_error(self) -> ErrorContract {
        self.error
    }
}

impl From<InvalidResultOfContract> for ErrorContract {
    fn from(invalid: InvalidResultOfContract) -> Self {
        invalid.error
    }
}
