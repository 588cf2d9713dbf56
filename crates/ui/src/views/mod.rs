mod home;
mod quiz;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::{QuizBoard, QuizView};
pub use results::{ResultsCard, ResultsView};
pub use state::ViewError;
