//! Typed bindings for the [Telegram Bot API](https://core.telegram.org/bots/api).
//!
//! Each operation is a request record implementing [`Method`], which binds it to a wire name,
//! an HTTP verb and a response type. [`Bot`] submits the records through a [`Transport`]
//! and decodes the reply into an [`Envelope`].
//!
//! ```no_run
//! use botapi::{Bot, HttpTransport, methods::SendMessage};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let bot = Bot::new(HttpTransport::builder().token("123:secret").build()?);
//! let message = bot.execute(&SendMessage::builder().chat_id("@channel").text("Hello").build()).await?;
//! println!("sent #{}", message.id);
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod methods;
pub mod objects;
pub mod prelude;
pub mod transport;

pub use self::{
    bot::Bot,
    envelope::{Envelope, Failure, ResponseParameters},
    error::{DecodeError, Error, TransportError},
    methods::{Binding, Method, Verb},
    transport::{Transport, http::HttpTransport},
};
