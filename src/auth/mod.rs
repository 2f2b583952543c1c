//! Authentication
//!
//! Verifies bearer tokens issued by the account service and exposes the
//! caller to handlers through the [`CurrentUser`] and [`AdminUser`] extractors.

mod extract;
mod token;

pub use extract::{AdminUser, CurrentUser};
pub use token::{token_from_header, Claims, Role, TokenVerifier, MISSING_TOKEN_MESSAGE};
