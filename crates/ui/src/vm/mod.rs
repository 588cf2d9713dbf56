mod quiz_screen_vm;
mod results_vm;

pub use quiz_screen_vm::{CardSlot, PromptState, QuizScreen, ScreenHandle};
pub use results_vm::ResultsVm;
