//! # Fallback Responses
//!
//! File: cli/src/commands/bridge/fallback.rs
//!
//! ## Overview
//!
//! Canned replies used whenever the generative model cannot answer. The user's
//! words are lower-cased and checked against an ordered list of keyword rules; the
//! first rule with any keyword occurring as a substring wins. Order is the point:
//! anything that sounds like an emergency must pre-empt every other category, so
//! "help me find the bus platform" is answered as an emergency, not a bus query.
//!
//! Replies are always English. The composed system prompt is not consulted here.
//!
use super::action::ActionTag;

/// What the fallback classifier decided the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Emergency,
    Lost,
    Tutorial,
    Bus,
    Train,
    Airport,
    ReadAloud,
    Expense,
    Route,
    Greeting,
    Unknown,
}

/// Keyword rules in priority order.
const RULES: [(Intent, &[&str]); 10] = [
    (
        Intent::Emergency,
        &["help", "emergency", "urgent", "danger", "sos", "accident", "unsafe", "scared"],
    ),
    (
        Intent::Lost,
        &["lost", "where am i", "find me", "location", "track"],
    ),
    (
        Intent::Tutorial,
        &["how to", "how do i", "show me", "tutorial", "teach", "learn"],
    ),
    (Intent::Bus, &["bus", "route", "bus number", "platform"]),
    (
        Intent::Train,
        &["train", "railway", "pnr", "coach", "station"],
    ),
    (
        Intent::Airport,
        &["flight", "airport", "plane", "boarding", "check-in"],
    ),
    (Intent::ReadAloud, &["read", "read this", "read screen", "speak"]),
    (
        Intent::Expense,
        &["expense", "cost", "fare", "money", "spend", "price", "ticket price"],
    ),
    (
        Intent::Route,
        &["route", "direction", "navigate", "way", "reach", "go to", "from", "to"],
    ),
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening", "namaste"],
    ),
];

impl Intent {
    fn reply(self) -> &'static str {
        match self {
            Intent::Emergency => {
                "I am activating Emergency Mode immediately. Staying with you. Please stay calm."
            }
            Intent::Lost => {
                "Don't worry. I am opening the live map now. Please look at the screen."
            }
            Intent::Tutorial => "I will show you a video guide. Please watch carefully.",
            Intent::Bus => "Let me show you the bus information now. Opening bus tracker.",
            Intent::Train => "I will show you train details now. Please wait.",
            Intent::Airport => "Opening airport information for you now.",
            Intent::ReadAloud => "I will read the screen to you now. Please listen.",
            Intent::Expense => {
                "I can help you track travel costs. Let me show you your expense history."
            }
            Intent::Route => {
                "I can help you plan your route. Please tell me where you want to go."
            }
            Intent::Greeting => {
                "Hello! I am Navigo Assistant. I am here to help you travel safely and easily. What do you need?"
            }
            Intent::Unknown => {
                "I am here to help you. Please ask me about buses, trains, flights, or tickets. I will guide you."
            }
        }
    }

    /// The app action a fallback reply for this intent triggers, if any.
    pub fn action(self) -> Option<ActionTag> {
        match self {
            Intent::Emergency => Some(ActionTag::Emergency),
            Intent::Lost | Intent::Route => Some(ActionTag::OpenMap),
            Intent::Tutorial => Some(ActionTag::PlayTutorial),
            Intent::Bus => Some(ActionTag::NavigateBus),
            Intent::Train => Some(ActionTag::NavigateTrain),
            Intent::Airport => Some(ActionTag::NavigateAirport),
            Intent::ReadAloud => Some(ActionTag::ReadScreen),
            Intent::Expense | Intent::Greeting | Intent::Unknown => None,
        }
    }

    /// The full reply text, with the action tag appended when there is one.
    pub fn response(self) -> String {
        match self.action() {
            Some(tag) => format!("{} {}", self.reply(), tag),
            None => self.reply().to_string(),
        }
    }
}

/// Picks the first matching intent for `utterance`.
pub fn classify(utterance: &str) -> Intent {
    let lowered = utterance.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(Intent::Unknown, |(intent, _)| *intent)
}

/// Canned reply for `utterance`.
pub fn fallback_response(utterance: &str) -> String {
    classify(utterance).response()
}
