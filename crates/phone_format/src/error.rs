use thiserror::Error;

/// Construction-time misuse of [`PhoneFormatter`](crate::PhoneFormatter).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid phone formatter configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Why a settled phone number fails NANP validation.
///
/// Failures are informational. They are reported to the host and never block
/// editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ValidationFailure {
    #[error("number is too short")]
    NumberTooShort,
    #[error("area code cannot start with 0")]
    AreaCodeZero,
    #[error("area code cannot start with 1")]
    AreaCodeOne,
    #[error("area code cannot be of the form N9N")]
    AreaCodeN9N,
    #[error("central office code cannot start with 1")]
    CentralOfficeOne,
    #[error("central office code cannot be of the form N11")]
    CentralOfficeN11,
}

impl ValidationFailure {
    /// Every failure, in the order the checks run.
    pub const ALL: [ValidationFailure; 6] = [
        ValidationFailure::NumberTooShort,
        ValidationFailure::AreaCodeZero,
        ValidationFailure::AreaCodeOne,
        ValidationFailure::AreaCodeN9N,
        ValidationFailure::CentralOfficeOne,
        ValidationFailure::CentralOfficeN11,
    ];

    /// Stable reason code handed to hosts for localization.
    pub const fn code(self) -> &'static str {
        match self {
            ValidationFailure::NumberTooShort => "phone-formatter.number-too-short",
            ValidationFailure::AreaCodeZero => "phone-formatter.area-code-zero",
            ValidationFailure::AreaCodeOne => "phone-formatter.area-code-one",
            ValidationFailure::AreaCodeN9N => "phone-formatter.area-code-n9n",
            ValidationFailure::CentralOfficeOne => "phone-formatter.central-office-one",
            ValidationFailure::CentralOfficeN11 => "phone-formatter.central-office-n11",
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }
}
