mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use clap::Parser;

use authprobe_client::{ApiClient, Session, TokenErrorMatcher};
use authprobe_store::TokenStore;

use cli::{Cli, Command, TokenAction};

fn open_store(cli: &Cli) -> anyhow::Result<TokenStore> {
    match &cli.token_file {
        Some(path) => Ok(TokenStore::at(path.clone())),
        None => Ok(TokenStore::open_default()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    authprobe_observability::init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url.clone());
    let store = open_store(&cli)?;
    let matcher = TokenErrorMatcher::default();

    let ok = match cli.command {
        Command::Health => commands::auth::health(&client).await,

        Command::Register {
            username,
            email,
            password,
        } => commands::auth::register(&client, username, email, password).await,

        Command::Login {
            credential,
            password,
        } => {
            let mut session = Session::load(store);
            commands::auth::login(&client, &mut session, credential, password).await?
        }

        Command::Profile => {
            let mut session = Session::load(store);
            commands::auth::profile(&client, &mut session, &matcher).await
        }

        Command::Verify => {
            let mut session = Session::load(store);
            commands::auth::verify(&client, &mut session, &matcher).await
        }

        Command::Logout => {
            let mut session = Session::load(store);
            commands::auth::logout(&client, &mut session).await
        }

        Command::ForgotPassword { email } => commands::password::forgot(&client, email).await,

        Command::ResetPassword {
            reset_token,
            new_password,
        } => commands::password::reset(&client, reset_token, new_password).await,

        Command::ChangePassword {
            current_password,
            new_password,
        } => {
            let mut session = Session::load(store);
            commands::password::change(&client, &mut session, &matcher, current_password, new_password)
                .await
        }

        Command::Token { action } => match action {
            TokenAction::Diagnose { token } => commands::token::diagnose(&store, token),
            TokenAction::Check => commands::token::check(&store),
            TokenAction::Clear => commands::token::clear(&store),
        },

        Command::QuickTest => {
            let mut session = Session::load(store);
            commands::quick_test::run(&client, &mut session, &matcher).await?
        }

        Command::Watch { interval } => {
            commands::watch::run(&client, interval).await;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
