//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use reqwest::ClientBuilder;
use secrecy::{ExposeSecret, SecretString};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use url::Url;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Send me a video link and I'll send the video back. Commands:")]
pub enum Command {
    // Deep-link payload from t.me/<bot>?start=<payload>, empty for a bare /start
    #[command(description = "show the welcome message")]
    Start(String),
    #[command(description = "list the available commands")]
    Help,
}

/// Creates a Bot instance with custom or default API URL
///
/// The HTTP client gets a long timeout so that large video uploads are not
/// cut off halfway.
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to build the HTTP client
pub fn create_bot(token: &SecretString, api_url: Option<&Url>) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    let bot = match api_url {
        Some(url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Whether a message text is a bot command (`/start`, `/anything`)
pub fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions() {
        let command_list = Command::descriptions().to_string();

        assert!(command_list.contains("Send me a video link"));
        assert!(command_list.contains("/start"));
        assert!(command_list.contains("/help"));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "vidrelay_bot").unwrap(), Command::Start(String::new()));
        assert_eq!(
            Command::parse("/start promo42", "vidrelay_bot").unwrap(),
            Command::Start("promo42".to_string())
        );
        assert_eq!(Command::parse("/help", "vidrelay_bot").unwrap(), Command::Help);
        assert!(Command::parse("/download", "vidrelay_bot").is_err());
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/start"));
        assert!(is_command("  /unknown arg"));
        assert!(!is_command("https://example.com/video"));
        assert!(!is_command("not a url"));
    }

    #[test]
    fn test_create_bot_with_custom_api_url() {
        let token = SecretString::from("123:abc".to_string());
        let url = Url::parse("http://localhost:8081").unwrap();

        let bot = create_bot(&token, Some(&url)).unwrap();

        assert_eq!(bot.api_url().as_str(), "http://localhost:8081/");
        assert_eq!(bot.token(), "123:abc");
    }
}
