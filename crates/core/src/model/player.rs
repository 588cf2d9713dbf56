use serde::{Deserialize, Serialize};

/// One side of a question: who the player is and how to picture them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    #[serde(default)]
    pub team: String,
    /// URI of the player's portrait image.
    pub headshot: String,
}

impl PlayerSummary {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        headshot: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            headshot: headshot.into(),
        }
    }
}
