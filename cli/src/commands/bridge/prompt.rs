//! # System Prompt Composition
//!
//! File: cli/src/commands/bridge/prompt.rs
//!
//! ## Overview
//!
//! Builds the single instruction string sent ahead of the user's words. It is the
//! fixed persona template followed by a `CURRENT USER CONTEXT` block. The block
//! lists only what the request actually carries, in a fixed order:
//!
//! 1. preferred language
//! 2. user name
//! 3. transport mode
//! 4. expense total (2 decimals, rupee prefix) and entry count
//! 5. one line per enabled accessibility flag
//!
//! Composition is pure: no I/O, and identical contexts give identical prompts.
//!
use super::action::ActionTag;
use super::request::RequestContext;
use std::fmt::Write;

/// Languages the assistant must understand and answer in.
pub const SUPPORTED_LANGUAGES: [&str; 17] = [
    "English",
    "Hindi",
    "Tamil",
    "Telugu",
    "Malayalam",
    "Kannada",
    "Bengali",
    "Marathi",
    "Gujarati",
    "Punjabi",
    "Odia",
    "Assamese",
    "Urdu",
    "Sanskrit",
    "Kashmiri",
    "Konkani",
    "Maithili",
];

const CURRENCY_PREFIX: &str = "₹";

const PERSONA: &str = "You are 'Navigo Assistant', an empathetic, intelligent, and accessible travel guide embedded in the 'Navigo' transport application.

**YOUR AUDIENCE:**
Your users are often first-time travelers, elderly people, or people with disabilities who may not be able to read well. They might be anxious or confused.";

const KNOWLEDGE_AND_GUIDANCE: &str = "**YOUR KNOWLEDGE BASE:**
- **Bus:** You know about Platform numbers, Bus numbers, and Live Tracking.
- **Train:** You know about PNR status, Coach position, and Station facilities.
- **Airport:** You know about Check-in counters, Security gates, and Boarding passes.
- **Procedures:** You can explain \"How to buy a ticket\" or \"How to pass security\" step-by-step.

**FEATURE GUIDANCE:**
- When asked about distance, time, or expenses, provide a clear estimate and say what inputs you need if missing.
- Proactively mention available travel modes (bus, railway, metro, taxi, airport) and suggest the best option for the user.
- Highlight helpful app features when relevant: live map, route planner, expense tracker, accessibility support, and emergency help.";

const EXAMPLES: &str = "**EXAMPLE CONVERSATIONS:**

**User (English):** \"I am lost, where is the bus to Chennai?\"
**You:** \"Don't worry. I am opening the live map for the Chennai bus now. Please look at the screen. [ACTION:NAVIGATE_BUS]\"

**User (Tamil):** \"Bus eppo varum?\"
**You:** \"Chennai bus 10 nimidathil varum. Platform 5-il nillungal. [ACTION:OPEN_MAP]\"

**User (Hindi):** \"Ticket kaise lete hain?\"
**You:** \"Main aapko ticket lene ka video dikhata hoon. Kripya dhyan se dekhein. [ACTION:PLAY_TUTORIAL]\"

**User (English):** \"I feel unsafe here.\"
**You:** \"I am activating Emergency Mode immediately. Staying with you. [ACTION:EMERGENCY]\"

**CONTEXT INJECTION:**
When you answer, assume you have access to the user's current location and schedule. If the system provides data like `{ bus_delay: '10 mins' }`, incorporate that into your answer naturally.";

const CLOSING: &str = "**REMEMBER:** Respond in the user's language. Be brief, kind, and include ACTION tags when appropriate.";

/// The fixed part of the prompt, independent of any request.
pub fn instruction_template() -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(PERSONA);
    out.push_str("\n\n**YOUR CORE RULES:**\n");
    out.push_str(
        "1. **Tone:** Be extremely patient, polite, and reassuring. Speak in simple, short sentences suitable for Text-to-Speech (TTS).\n",
    );
    let _ = writeln!(
        out,
        "2. **Language:** Automatically detect the language of the user's input. You MUST support these {} languages: {}. Always reply in the SAME language the user speaks.",
        SUPPORTED_LANGUAGES.len(),
        SUPPORTED_LANGUAGES.join(", ")
    );
    out.push_str(
        "3. **No Jargon:** Never use technical terms. Instead of \"Authentication required,\" say \"Please log in.\"\n",
    );
    out.push_str(
        "4. **Brevity:** Keep answers under 40 words unless explaining a complex procedure.\n\n",
    );
    out.push_str(KNOWLEDGE_AND_GUIDANCE);
    out.push_str("\n\n**AUTOMATION & ACTIONS (CRITICAL):**\n");
    out.push_str(
        "If the user's intent is to perform an action inside the app, you must append a specific **ACTION TAG** at the end of your response in square brackets like this: `[ACTION:NAME]`.\n\n",
    );
    out.push_str("**List of Action Tags:**\n");
    for tag in ActionTag::ALL {
        let _ = writeln!(out, "- `{}` -> {}", tag, tag.usage_hint());
    }
    out.push('\n');
    out.push_str(EXAMPLES);
    out.push('\n');
    out
}

/// Sum and count of the logged expenses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
}

impl ExpenseSummary {
    /// `None` when nothing was logged.
    pub fn of(context: &RequestContext) -> Option<Self> {
        if context.expenses.is_empty() {
            return None;
        }
        Some(Self {
            total: context.expenses.iter().map(|e| e.amount).sum(),
            count: context.expenses.len(),
        })
    }
}

/// Builds the full system prompt for one request.
pub fn compose_prompt(context: &RequestContext) -> String {
    let mut prompt = instruction_template();
    prompt.push_str("\n\n**CURRENT USER CONTEXT:**\n");

    if let Some(language) = &context.language {
        let _ = writeln!(prompt, "- Preferred Language: {language}");
    }
    if let Some(name) = &context.user_name {
        let _ = writeln!(prompt, "- User Name: {name}");
    }
    if let Some(mode) = &context.transport_mode {
        let _ = writeln!(prompt, "- Current Transport Mode: {mode}");
    }
    if let Some(summary) = ExpenseSummary::of(context) {
        let _ = writeln!(
            prompt,
            "- Total Travel Expenses: {CURRENCY_PREFIX}{:.2}",
            summary.total
        );
        let _ = writeln!(prompt, "- Number of Trips Logged: {}", summary.count);
    }
    if context.accessibility.dark_mode {
        prompt.push_str("- Accessibility: Dark Mode enabled\n");
    }
    if context.accessibility.high_contrast {
        prompt.push_str("- Accessibility: High Contrast mode enabled\n");
    }

    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt.push('\n');
    prompt
}
