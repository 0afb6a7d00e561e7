use core::fmt;

/// Category of a recorded failure.
///
/// New categories may be added in minor releases, so matches outside this
/// crate need a wildcard arm.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailedReasonType {
    #[default]
    Unknown,
    Nothing,
    Empty,
    NotFound,
    AccessDenied,
    SessionAccessDenied,
    Incorrect,
    Duplicate,
    InternalError,
    OperationFailed,
    ValidationsError,
    NotImplemented,
    Timeout,
    WebServiceNotWorking,
}

impl FailedReasonType {
    pub const ALL: [FailedReasonType; 14] = [
        FailedReasonType::Unknown,
        FailedReasonType::Nothing,
        FailedReasonType::Empty,
        FailedReasonType::NotFound,
        FailedReasonType::AccessDenied,
        FailedReasonType::SessionAccessDenied,
        FailedReasonType::Incorrect,
        FailedReasonType::Duplicate,
        FailedReasonType::InternalError,
        FailedReasonType::OperationFailed,
        FailedReasonType::ValidationsError,
        FailedReasonType::NotImplemented,
        FailedReasonType::Timeout,
        FailedReasonType::WebServiceNotWorking,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FailedReasonType::Unknown => "Unknown",
            FailedReasonType::Nothing => "Nothing",
            FailedReasonType::Empty => "Empty",
            FailedReasonType::NotFound => "NotFound",
            FailedReasonType::AccessDenied => "AccessDenied",
            FailedReasonType::SessionAccessDenied => "SessionAccessDenied",
            FailedReasonType::Incorrect => "Incorrect",
            FailedReasonType::Duplicate => "Duplicate",
            FailedReasonType::InternalError => "InternalError",
            FailedReasonType::OperationFailed => "OperationFailed",
            FailedReasonType::ValidationsError => "ValidationsError",
            FailedReasonType::NotImplemented => "NotImplemented",
            FailedReasonType::Timeout => "Timeout",
            FailedReasonType::WebServiceNotWorking => "WebServiceNotWorking",
        }
    }

    /// Message used when a failure is built from the reason alone.
    pub const fn default_message(self) -> &'static str {
        match self {
            FailedReasonType::Unknown => "An unknown error occurred.",
            FailedReasonType::Nothing => "Nothing happened.",
            FailedReasonType::Empty => "The value is empty.",
            FailedReasonType::NotFound => "The requested item was not found.",
            FailedReasonType::AccessDenied => "Access is denied.",
            FailedReasonType::SessionAccessDenied => "Access is denied for this session.",
            FailedReasonType::Incorrect => "The input is incorrect.",
            FailedReasonType::Duplicate => "The item already exists.",
            FailedReasonType::InternalError => "An internal error occurred.",
            FailedReasonType::OperationFailed => "The operation failed.",
            FailedReasonType::ValidationsError => "Validation failed.",
            FailedReasonType::NotImplemented => "The operation is not implemented.",
            FailedReasonType::Timeout => "The operation timed out.",
            FailedReasonType::WebServiceNotWorking => "The web service is not working.",
        }
    }
}

impl fmt::Display for FailedReasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
