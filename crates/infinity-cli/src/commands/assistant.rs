use infinity_core::assistant::{self, FALLBACK_QUOTE, FALLBACK_REPLY};
use infinity_core::storage::Config;
use infinity_core::GeminiClient;

use crate::app;

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

pub fn ask(user: Option<&str>, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;
    let config = Config::load_or_default();

    let reply = match GeminiClient::from_config(&config.assistant) {
        Ok(client) => runtime()?.block_on(app.chat(&client, message)),
        Err(e) => {
            tracing::warn!(error = %e, "assistant unavailable");
            FALLBACK_REPLY.to_string()
        }
    };
    println!("{reply}");
    app::close(app)
}

pub fn quote() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let quote = match GeminiClient::from_config(&config.assistant) {
        Ok(client) => runtime()?.block_on(assistant::daily_quote(&client)),
        Err(e) => {
            tracing::warn!(error = %e, "assistant unavailable");
            FALLBACK_QUOTE.to_string()
        }
    };
    println!("{quote}");
    Ok(())
}
