mod cli;
mod logging;

use botapi::{
    Bot,
    Envelope,
    HttpTransport,
    methods::{GetMe, GetUpdates, SendMessage, bindings},
    prelude::*,
};
use clap::Parser;

use crate::cli::{Cli, Command, ConnectionArgs};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _stderr_guard = logging::init()?;
    let timeout = Duration::from_secs(cli.connection.timeout_secs);

    match cli.command {
        Command::Operations => {
            for binding in bindings() {
                println!("{binding}");
            }
            Ok(())
        }

        Command::GetMe => {
            let bot = cli.connection.bot(timeout)?;
            print_envelope(bot.call(&GetMe).await?)
        }

        Command::GetUpdates { offset, limit, timeout_secs, allowed_updates } => {
            let poll_timeout = Duration::from_secs(timeout_secs.unwrap_or_default());
            let bot = cli.connection.bot(timeout + poll_timeout)?;
            let method = GetUpdates::builder()
                .maybe_offset(offset)
                .maybe_limit(limit)
                .maybe_timeout(timeout_secs)
                .maybe_allowed_updates(allowed_updates)
                .build();
            let envelope = bot.call(&method).await?;
            if let Envelope::Ok(updates) = &envelope {
                let next_offset = updates.last().map(|last_update| last_update.id.0 + 1);
                info!(n = updates.len(), next_offset, "received updates");
            }
            print_envelope(envelope)
        }

        Command::SendMessage { chat, text, parse_mode } => {
            let bot = cli.connection.bot(timeout)?;
            let method = SendMessage::builder().chat_id(chat).text(text).maybe_parse_mode(parse_mode).build();
            print_envelope(bot.call(&method).await?)
        }
    }
}

impl ConnectionArgs {
    fn bot(&self, timeout: Duration) -> Result<Bot> {
        let token = self.bot_token.as_deref().context("`--bot-token` or `BOT_TOKEN` is required")?;
        let transport = HttpTransport::builder()
            .token(token)
            .root_url(self.api_url.clone())
            .timeout(timeout)
            .build()?;
        Ok(Bot::new(transport))
    }
}

/// Print the result, or fail with the reported error.
fn print_envelope<T: Serialize>(envelope: Envelope<T>) -> Result {
    match envelope {
        Envelope::Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Envelope::Failed(failure) => bail!("{}: {}", failure.error_code, failure.description),
    }
}
