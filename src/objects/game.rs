use serde::{Deserialize, Serialize};

use crate::objects::User;

/// One row of the [high scores table][1] for a game.
///
/// [1]: https://core.telegram.org/bots/api#gamehighscore
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHighScore {
    /// Position in high score table for the game.
    pub position: u32,

    pub user: User,
    pub score: i64,
}
