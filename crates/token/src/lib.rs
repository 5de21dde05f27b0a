//! `authprobe-token` — client-side JWT inspection (no signature verification).
//!
//! This crate treats a token purely as a hint held by the client: the payload
//! segment is decoded and read, nothing is verified. It is intentionally
//! decoupled from HTTP and storage.

pub mod diagnose;
pub mod inspect;

pub use diagnose::{diagnose, diagnose_at, TokenDiagnosis};
pub use inspect::{
    decode_payload, is_expired, is_expired_at, is_valid_format, remaining_seconds,
    remaining_seconds_at, TokenPayload,
};
