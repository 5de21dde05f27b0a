//! `authprobe-client` — HTTP client for the remote authentication API.
//!
//! Every call resolves to a uniform [`ApiOutcome`] envelope: success, server
//! rejection, and network failure are all data, never an `Err` the caller has
//! to unwind past. Token state lives in an explicit [`Session`] value owned by
//! the calling layer.

pub mod api;
pub mod envelope;
pub mod heuristics;
pub mod session;

pub use api::{
    extract_access_token, extract_reset_token, ApiClient, ChangePasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest, DEFAULT_API_URL,
};
pub use envelope::ApiOutcome;
pub use heuristics::TokenErrorMatcher;
pub use session::Session;
