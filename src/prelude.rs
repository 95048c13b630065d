pub use std::time::Duration;

pub use anyhow::{Context, anyhow, bail};
pub use serde::{Deserialize, Serialize};
pub use tracing::{Level, debug, error, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
