use std::convert::Infallible;

use botapi::{
    ids::{ChatId, Recipient},
    objects::{AllowedUpdate, ParseMode},
    transport::http::DEFAULT_ROOT_URL,
};
use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and how to reach the Bot API server.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Bot token, as issued by @BotFather.
    #[clap(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// Bot API server root.
    #[clap(long, env = "BOT_API_URL", default_value = DEFAULT_ROOT_URL)]
    pub api_url: Url,

    /// Request timeout.
    #[clap(long, env = "BOT_API_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test the bot token.
    GetMe,

    /// Manually check out the bot updates.
    GetUpdates {
        #[clap(long)]
        offset: Option<i64>,

        #[clap(long)]
        limit: Option<u32>,

        /// Long polling timeout.
        #[clap(long)]
        timeout_secs: Option<u64>,

        #[clap(long, value_delimiter = ',', num_args = 1..)]
        allowed_updates: Option<Vec<AllowedUpdate>>,
    },

    /// Send a text message.
    SendMessage {
        /// Numeric chat ID or `@username`.
        #[clap(long, value_parser = parse_recipient)]
        chat: Recipient,

        #[clap(long)]
        text: String,

        #[clap(long, value_enum)]
        parse_mode: Option<ParseMode>,
    },

    /// Print the binding table without calling the API.
    #[clap(alias = "bindings")]
    Operations,
}

/// Command-line chat reference: a number is a chat ID, anything else is a username.
#[allow(clippy::unnecessary_wraps)]
fn parse_recipient(value: &str) -> Result<Recipient, Infallible> {
    Ok(value.parse().map_or_else(|_| Recipient::Username(value.to_owned()), |id| Recipient::Id(ChatId(id))))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_recipient_ok() {
        assert_eq!(parse_recipient("-100123"), Ok(Recipient::Id(ChatId(-100_123))));
        assert_eq!(parse_recipient("@channel"), Ok(Recipient::Username("@channel".to_owned())));
    }

    #[test]
    fn parse_send_message_ok() {
        let cli = Cli::parse_from([
            "botapi",
            "send-message",
            "--chat",
            "42",
            "--text",
            "hi",
            "--parse-mode",
            "markdown-v2",
        ]);
        let Command::SendMessage { chat, text, parse_mode } = cli.command else {
            unreachable!();
        };
        assert_eq!(chat, Recipient::Id(ChatId(42)));
        assert_eq!(text, "hi");
        assert_eq!(parse_mode, Some(ParseMode::MarkdownV2));
    }

    #[test]
    fn parse_get_updates_ok() {
        let cli = Cli::parse_from([
            "botapi",
            "--bot-token",
            "123:secret",
            "--timeout-secs",
            "5",
            "get-updates",
            "--offset",
            "-1",
            "--allowed-updates",
            "message,callback_query",
        ]);
        assert_eq!(cli.connection.bot_token.as_deref(), Some("123:secret"));
        assert_eq!(cli.connection.timeout_secs, 5);
        let Command::GetUpdates { offset, allowed_updates, .. } = cli.command else {
            unreachable!();
        };
        assert_eq!(offset, Some(-1));
        assert_eq!(allowed_updates, Some(vec![AllowedUpdate::Message, AllowedUpdate::CallbackQuery]));
    }
}
