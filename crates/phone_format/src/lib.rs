//! # phone_format
//!
//! As-you-type phone number masking.
//!
//! - [`PhoneFormatter`]: guesses a [`Layout`] from the digits typed so far,
//!   renders them with delimiters, strips country codes and validates the
//!   national number against North American Numbering Plan rules
//! - Edit translation: [`PhoneFormatter::translate_edit`] maps an edit on the
//!   formatted text (typing, backspace, paste, arrows) to the next formatted
//!   text and caret, treating delimiters as transparent
//!
//! ```
//! use phone_format::PhoneFormatter;
//!
//! let formatter = PhoneFormatter::new();
//! assert_eq!(formatter.format("4155551234"), "(415) 555-1234");
//! assert_eq!(formatter.format("+14155551234"), "+1 (415) 555-1234");
//! assert_eq!(formatter.format(None), "");
//! ```
//!
//! The formatter is an immutable value. Share one instance across fields or
//! plug it into a [`mask_core::FieldStore`].

mod country;
mod digits;
mod edit;
mod error;
mod formatter;
mod layout;

pub use country::{CallingCode, calling_code};
pub use digits::DigitString;
pub use error::{ConfigError, ValidationFailure};
pub use formatter::{DELIMITERS, MAX_DIGITS, PhoneFormatter, PhoneFormatterConfig};
pub use layout::{Layout, Lead, NATIONAL_LEN};
