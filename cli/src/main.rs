//! Command-line account client for the plagiarism checker backend.
//!
//! Drives the same session store as the web client, with `reqwest` for HTTP
//! and a token file in place of `localStorage`.

mod http;
mod token_file;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use session::route::NoopNavigator;
use session::{
    AuthFailure, ClientConfig, CredentialResponse, SessionSnapshot, SessionStatus, SessionStore,
    handle_credential_response, submit_login, submit_register,
};

use crate::http::ReqwestAuthBackend;
use crate::token_file::{FileCredentialStore, default_token_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Auth(#[from] AuthFailure),
    #[error("not signed in")]
    NotSignedIn,
    #[error("no config directory; pass --token-file or set PLAGIARISM_TOKEN_FILE")]
    MissingTokenPath,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "plagiarism", about = "Plagiarism checker account CLI")]
struct Cli {
    #[arg(long, env = "PLAGIARISM_API_URL", default_value = session::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "PLAGIARISM_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        email: String,
        #[arg(long, env = "PLAGIARISM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register {
        email: String,
        #[arg(long, env = "PLAGIARISM_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to `--password`.
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Exchange a Google ID token for a session.
    Google { credential: String },
    /// Print the signed-in identity as JSON.
    Whoami,
    /// Print the session status.
    Status,
    /// Forget the stored credential.
    Logout,
}

type CliSession = SessionStore<ReqwestAuthBackend, FileCredentialStore>;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// One-line summary for `status`.
fn describe(snapshot: &SessionSnapshot) -> String {
    match (snapshot.status, &snapshot.identity) {
        (SessionStatus::Authenticated, Some(identity)) => {
            format!("authenticated {} ({})", identity.email, identity.auth_provider.as_str())
        }
        (status, _) => status.to_string(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();

    let token_path = cli.token_file.or_else(default_token_path).ok_or(CliError::MissingTokenPath)?;
    let config = ClientConfig::from_values(Some(&cli.base_url), None);
    let store: CliSession =
        SessionStore::new(ReqwestAuthBackend::new(config)?, FileCredentialStore::new(token_path), Box::new(NoopNavigator));

    run(&store, cli.command).await
}

async fn run(store: &CliSession, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            submit_login(store, &email, &password).await?;
            println!("{}", describe(&store.snapshot()));
        }
        Command::Register { email, password, confirm } => {
            let confirm = confirm.as_deref().unwrap_or(&password);
            submit_register(store, &email, &password, confirm).await?;
            println!("{}", describe(&store.snapshot()));
        }
        Command::Google { credential } => {
            let response = CredentialResponse { credential, select_by: Some("cli".to_owned()) };
            handle_credential_response(store, &response).await?;
            println!("{}", describe(&store.snapshot()));
        }
        Command::Whoami => {
            store.hydrate().await;
            let identity = store.identity().ok_or(CliError::NotSignedIn)?;
            println!("{}", serde_json::to_string_pretty(&identity)?);
        }
        Command::Status => {
            store.hydrate().await;
            println!("{}", describe(&store.snapshot()));
        }
        Command::Logout => {
            store.logout();
            println!("{}", SessionStatus::Anonymous);
        }
    }
    Ok(())
}
