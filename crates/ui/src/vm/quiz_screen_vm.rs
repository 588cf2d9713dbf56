use dioxus::prelude::*;
use quiz_core::model::{Choice, PlayerSummary};
use services::{AnswerView, CardReveal, Destination, Feedback, QuestionView, QuizRenderer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptState {
    #[default]
    Loading,
    Ready,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardSlot {
    pub player: Option<PlayerSummary>,
    pub reveal: Option<CardReveal>,
}

impl CardSlot {
    /// Class list for the card element, e.g. `player-card disabled correct winner`.
    #[must_use]
    pub fn class(&self, enabled: bool) -> String {
        let mut classes = vec!["player-card"];
        if !enabled {
            classes.push("disabled");
        }
        if let Some(reveal) = &self.reveal {
            classes.extend(reveal.markers.classes());
        }
        classes.join(" ")
    }
}

/// Everything the quiz page draws, one field per render slot.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreen {
    pub counter: String,
    pub progress_percent: f64,
    pub prompt: String,
    pub prompt_state: PromptState,
    pub cards: [CardSlot; 2],
    pub cards_enabled: bool,
    pub score_label: String,
    pub feedback: Option<Feedback>,
    pub destination: Option<Destination>,
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self {
            counter: String::new(),
            progress_percent: 0.0,
            prompt: "Loading...".into(),
            prompt_state: PromptState::Loading,
            cards: [CardSlot::default(), CardSlot::default()],
            cards_enabled: false,
            score_label: "Score: 0".into(),
            feedback: None,
            destination: None,
        }
    }
}

impl QuizScreen {
    #[must_use]
    pub fn card(&self, choice: Choice) -> &CardSlot {
        &self.cards[choice.index()]
    }

    #[must_use]
    pub fn card_class(&self, choice: Choice) -> String {
        self.card(choice).class(self.cards_enabled)
    }

    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.progress_percent)
    }
}

impl QuizRenderer for QuizScreen {
    fn clear_result(&mut self) {
        for card in &mut self.cards {
            card.reveal = None;
        }
        self.feedback = None;
        self.cards_enabled = true;
    }

    fn show_loading(&mut self) {
        self.prompt = "Loading...".into();
        self.prompt_state = PromptState::Loading;
    }

    fn render_question(&mut self, view: &QuestionView) {
        self.counter.clone_from(&view.counter);
        self.progress_percent = view.progress_percent;
        self.prompt.clone_from(&view.prompt);
        self.prompt_state = PromptState::Ready;
        for choice in Choice::BOTH {
            self.cards[choice.index()].player = Some(view.player(choice).clone());
        }
    }

    fn show_question_error(&mut self, message: &str) {
        self.prompt = message.to_string();
        self.prompt_state = PromptState::Error;
    }

    fn set_cards_enabled(&mut self, enabled: bool) {
        self.cards_enabled = enabled;
    }

    fn render_answer(&mut self, view: &AnswerView) {
        self.score_label.clone_from(&view.score_label);
        for choice in Choice::BOTH {
            self.cards[choice.index()].reveal = Some(view.card(choice).clone());
        }
        self.feedback = Some(view.feedback.clone());
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress_percent = percent;
    }

    fn navigate(&mut self, destination: Destination) {
        self.destination = Some(destination);
    }
}

/// Lets the controller render straight into a component's signal.
#[derive(Clone, Copy)]
pub struct ScreenHandle {
    screen: Signal<QuizScreen>,
}

impl ScreenHandle {
    #[must_use]
    pub fn new(screen: Signal<QuizScreen>) -> Self {
        Self { screen }
    }
}

impl QuizRenderer for ScreenHandle {
    fn clear_result(&mut self) {
        self.screen.write().clear_result();
    }

    fn show_loading(&mut self) {
        self.screen.write().show_loading();
    }

    fn render_question(&mut self, view: &QuestionView) {
        self.screen.write().render_question(view);
    }

    fn show_question_error(&mut self, message: &str) {
        self.screen.write().show_question_error(message);
    }

    fn set_cards_enabled(&mut self, enabled: bool) {
        self.screen.write().set_cards_enabled(enabled);
    }

    fn render_answer(&mut self, view: &AnswerView) {
        self.screen.write().render_answer(view);
    }

    fn set_progress(&mut self, percent: f64) {
        self.screen.write().set_progress(percent);
    }

    fn navigate(&mut self, destination: Destination) {
        self.screen.write().navigate(destination);
    }
}
