//! One module per command group, mirroring the sections of the original page.

pub mod auth;
pub mod password;
pub mod token;
pub mod watch;
