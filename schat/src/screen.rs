//! Keyword crisis screen applied before any external call.
//!
//! ```rust
//! use schat::{CrisisScreen, ScreeningResult};
//!
//! let screen = CrisisScreen::default();
//! assert_eq!(screen.screen("exams are stressing me out"), ScreeningResult::Clear);
//! assert!(screen.is_crisis("Sometimes I WANT TO DIE"));
//! ```

/// First shipped phrase list. Matching is case-insensitive substring.
pub const CRISIS_PHRASES_V1: &[&str] = &[
    "suicide",
    "kill myself",
    "self-harm",
    "end my life",
    "want to die",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisPhraseSet {
    version: String,
    phrases: Vec<String>,
}

impl CrisisPhraseSet {
    pub fn new<I, S>(version: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            version: version.into(),
            phrases: Vec::new(),
        };
        for phrase in phrases {
            set.push(phrase.as_ref());
        }
        set
    }

    pub fn v1() -> Self {
        Self::new("v1", CRISIS_PHRASES_V1.iter().copied())
    }

    pub fn with_phrase(mut self, phrase: impl AsRef<str>) -> Self {
        self.push(phrase.as_ref());
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    fn push(&mut self, phrase: &str) {
        let phrase = phrase.trim().to_lowercase();
        if !phrase.is_empty() && !self.phrases.contains(&phrase) {
            self.phrases.push(phrase);
        }
    }
}

impl Default for CrisisPhraseSet {
    fn default() -> Self {
        Self::v1()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreeningResult {
    Clear,
    /// The message matched `phrase` and must not reach any provider.
    Escalate { phrase: String },
}

impl ScreeningResult {
    pub fn is_escalation(&self) -> bool {
        matches!(self, Self::Escalate { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CrisisScreen {
    phrases: CrisisPhraseSet,
}

impl CrisisScreen {
    pub fn new(phrases: CrisisPhraseSet) -> Self {
        Self { phrases }
    }

    pub fn phrase_set(&self) -> &CrisisPhraseSet {
        &self.phrases
    }

    pub fn screen(&self, message: &str) -> ScreeningResult {
        let normalized = message.to_lowercase();
        self.phrases
            .phrases()
            .iter()
            .find(|phrase| normalized.contains(phrase.as_str()))
            .map(|phrase| ScreeningResult::Escalate {
                phrase: phrase.clone(),
            })
            .unwrap_or(ScreeningResult::Clear)
    }

    pub fn is_crisis(&self, message: &str) -> bool {
        self.screen(message).is_escalation()
    }
}
