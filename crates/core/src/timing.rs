use std::time::Duration;

/// How long an answer result stays on screen before the quiz moves on.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(3000);

/// Pause between filling the progress bar and leaving for the results page.
pub const FINISH_DELAY: Duration = Duration::from_millis(300);
