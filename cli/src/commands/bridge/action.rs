//! # Action Tags
//!
//! File: cli/src/commands/bridge/action.rs
//!
//! A response may end with one bracketed directive such as `[ACTION:OPEN_MAP]`
//! telling the host app which screen to open. The vocabulary is closed: a bracket
//! with any other name is ordinary text.
//!
use std::fmt;

const TAG_PREFIX: &str = "[ACTION:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    NavigateBus,
    NavigateTrain,
    NavigateAirport,
    OpenMap,
    PlayTutorial,
    Emergency,
    ReadScreen,
}

impl ActionTag {
    /// Every tag, in the order the instruction template lists them.
    pub const ALL: [ActionTag; 7] = [
        ActionTag::NavigateBus,
        ActionTag::NavigateTrain,
        ActionTag::NavigateAirport,
        ActionTag::OpenMap,
        ActionTag::PlayTutorial,
        ActionTag::Emergency,
        ActionTag::ReadScreen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActionTag::NavigateBus => "NAVIGATE_BUS",
            ActionTag::NavigateTrain => "NAVIGATE_TRAIN",
            ActionTag::NavigateAirport => "NAVIGATE_AIRPORT",
            ActionTag::OpenMap => "OPEN_MAP",
            ActionTag::PlayTutorial => "PLAY_TUTORIAL",
            ActionTag::Emergency => "EMERGENCY",
            ActionTag::ReadScreen => "READ_SCREEN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// When the model should emit this tag, phrased for the instruction template.
    pub fn usage_hint(self) -> &'static str {
        match self {
            ActionTag::NavigateBus => "If user asks to see buses.",
            ActionTag::NavigateTrain => "If user asks to see trains.",
            ActionTag::NavigateAirport => "If user asks to see flights.",
            ActionTag::OpenMap => "If user asks \"Where am I?\" or \"Track my bus\".",
            ActionTag::PlayTutorial => "If user asks \"How do I do this?\" or \"Show me a video\".",
            ActionTag::Emergency => "If user says \"Help\", \"SOS\", or seems in danger.",
            ActionTag::ReadScreen => "If user asks \"Read this to me\".",
        }
    }

    /// Splits a trailing tag off `text`.
    ///
    /// Returns the text before the tag (trailing whitespace trimmed) together with
    /// the tag, or `None` when `text` does not end in a known tag.
    pub fn extract_trailing(text: &str) -> Option<(&str, ActionTag)> {
        let trimmed = text.trim_end();
        let body = trimmed.strip_suffix(']')?;
        let start = body.rfind(TAG_PREFIX)?;
        let tag = ActionTag::from_name(&body[start + TAG_PREFIX.len()..])?;
        Some((body[..start].trim_end(), tag))
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}]", TAG_PREFIX, self.name())
    }
}
