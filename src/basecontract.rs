use crate::errorcontract::ErrorContract;
use crate::failedreason::FailedReasonType;
use crate::invalidresult::InvalidResultOfContract;
use alloc::string::String;
use core::any::Any;
use core::fmt;

/// What every contract can answer without knowing its payload type.
pub trait Contract {
    fn is_success(&self) -> bool;

    fn error(&self) -> Option<&ErrorContract>;

    fn success_message(&self) -> Option<&str>;

    /// The payload, type-erased. `None` for failures and for contracts that
    /// carry no payload slot at all.
    fn untyped_result(&self) -> Option<&dyn Any>;

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Turns a failed contract into an [`InvalidResultOfContract`].
    fn ensure_success(&self) -> Result<(), InvalidResultOfContract> {
        match self.error() {
            None => Ok(()),
            Some(error) => {
                tracing::debug!(error = %error, "guarded access to a failed contract");
                Err(InvalidResultOfContract::new(error.clone()))
            }
        }
    }
}

/// A contract without a payload: success or a failure with its error tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseContract {
    pub(crate) outcome: Result<(), ErrorContract>,
    pub(crate) success_message: Option<String>,
}

impl BaseContract {
    pub const fn success() -> Self {
        BaseContract {
            outcome: Ok(()),
            success_message: None,
        }
    }

    pub const fn failure(error: ErrorContract) -> Self {
        BaseContract {
            outcome: Err(error),
            success_message: None,
        }
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub const fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    pub const fn error(&self) -> Option<&ErrorContract> {
        match self.outcome {
            Ok(()) => None,
            Err(ref error) => Some(error),
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn into_error(self) -> Option<ErrorContract> {
        self.outcome.err()
    }
}

impl Contract for BaseContract {
    fn is_success(&self) -> bool {
        BaseContract::is_success(self)
    }

    fn error(&self) -> Option<&ErrorContract> {
        BaseContract::error(self)
    }

    fn success_message(&self) -> Option<&str> {
        BaseContract::success_message(self)
    }

    fn untyped_result(&self) -> Option<&dyn Any> {
        None
    }
}

impl From<ErrorContract> for BaseContract {
    fn from(error: ErrorContract) -> Self {
        BaseContract::failure(error)
    }
}

impl From<FailedReasonType> for BaseContract {
    fn from(failed_reason_type: FailedReasonType) -> Self {
        BaseContract::failure(ErrorContract::from_reason(failed_reason_type))
    }
}

impl<S: Into<String>> From<(FailedReasonType, S)> for BaseContract {
    fn from(details: (FailedReasonType, S)) -> Self {
        BaseContract::failure(ErrorContract::from(details))
    }
}

impl From<&BaseContract> for bool {
    fn from(contract: &BaseContract) -> Self {
        contract.is_success()
    }
}

impl From<BaseContract> for bool {
    fn from(contract: BaseContract) -> Self {
        contract.is_success()
    }
}

impl fmt::Display for BaseContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Ok(()) => match self.success_message {
                Some(ref message) => write!(f, "Success: {message}"),
                None => f.write_str("Success"),
            },
            Err(ref error) => write!(f, "Failure: {error}"),
        }
    }
}
