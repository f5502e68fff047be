use clap::Subcommand;
use infinity_core::assistant::credentials::{self, API_KEY_ENV};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    SetKey {
        /// API key
        key: String,
    },
    /// Remove the stored API key
    ClearKey,
    /// Report whether an API key is available
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetKey { key } => {
            credentials::store_api_key(&key)?;
            println!("API key saved to keyring");
        }
        AuthAction::ClearKey => {
            credentials::clear_api_key()?;
            println!("API key removed from keyring");
        }
        AuthAction::Status => {
            if credentials::api_key().is_ok() {
                println!("API key configured");
            } else {
                println!("no API key; set {API_KEY_ENV} or run `infinity auth set-key <key>`");
            }
        }
    }
    Ok(())
}
