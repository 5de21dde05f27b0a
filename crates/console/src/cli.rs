//! Command-line surface of the harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use authprobe_client::DEFAULT_API_URL;

#[derive(Parser)]
#[command(
    name = "authprobe",
    about = "Manual test harness for a remote authentication API",
    version
)]
pub struct Cli {
    /// Base URL of the API under test
    #[arg(long, env = "AUTHPROBE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Token store file (defaults to the user config directory)
    #[arg(long, env = "AUTHPROBE_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// One-shot connectivity check against GET /health
    Health,

    /// Register a new user
    Register {
        /// Optional username; the server derives one from the email if omitted
        #[arg(short, long)]
        username: Option<String>,
        email: String,
        password: String,
    },

    /// Log in with a username or email and persist the issued token
    Login {
        /// Username or email
        credential: String,
        password: String,
    },

    /// Fetch the profile of the logged-in user
    Profile,

    /// Ask the server to verify the stored token
    Verify,

    /// Log out and clear the stored token
    Logout,

    /// Request a password reset token for an email
    ForgotPassword { email: String },

    /// Reset a password with a reset token
    ResetPassword {
        reset_token: String,
        new_password: String,
    },

    /// Change the password of the logged-in user
    ChangePassword {
        current_password: String,
        new_password: String,
    },

    /// Inspect or clear the locally stored token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Run the whole flow end to end against the API
    QuickTest,

    /// Probe connectivity periodically until interrupted
    Watch {
        /// Seconds between probes
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Diagnose a token (the stored one unless TOKEN is given)
    Diagnose { token: Option<String> },

    /// Diagnose the stored token; exit non-zero unless it is usable
    Check,

    /// Clear the stored token
    Clear,
}
