//! Companion-chat turn pipeline: access gate, crisis screen, reply generation
//! and speech synthesis, composed into one strictly sequential turn.
//!
//! ```rust
//! use schat::{CRISIS_SAFETY_MESSAGE, CrisisScreen, Persona, ReplyGenerator};
//!
//! assert!(CrisisScreen::default().is_crisis("I want to end my life"));
//! assert!(CRISIS_SAFETY_MESSAGE.contains("You're not alone"));
//!
//! let prompt = ReplyGenerator::build_prompt(&Persona::sahara(), "hello");
//! assert!(prompt.ends_with("User: hello\nSahara:"));
//! ```

mod error;
mod gate;
mod generator;
mod hooks;
mod persona;
mod screen;
mod service;
mod synthesizer;
mod types;

pub mod prelude {
    pub use crate::{
        AccessGate, CRISIS_SAFETY_MESSAGE, ChatError, ChatErrorKind, CrisisPhraseSet,
        CrisisScreen, NoopTurnHooks, Persona, ReplyGenerator, ScreeningResult, SpeechSynthesizer,
        TurnHooks, TurnPhase, TurnRequest, TurnResponse, TurnResult, TurnService,
        TurnServiceBuilder, TurnStatus, UPSTREAM_APOLOGY,
    };
    pub use scommon::{AccountId, TraceId};
}

pub use error::{ChatError, ChatErrorKind};
pub use gate::AccessGate;
pub use generator::{DEFAULT_GENERATION_MODEL, ReplyGenerator};
pub use hooks::{NoopTurnHooks, TurnHooks};
pub use persona::Persona;
pub use screen::{CRISIS_PHRASES_V1, CrisisPhraseSet, CrisisScreen, ScreeningResult};
pub use service::{TurnService, TurnServiceBuilder};
pub use synthesizer::{DEFAULT_VOICE_ID, SpeechSynthesizer};
pub use types::{
    CRISIS_SAFETY_MESSAGE, TurnPhase, TurnRequest, TurnResponse, TurnResult, TurnStatus,
    UPSTREAM_APOLOGY,
};
pub use scommon::{AccountId, TraceId};
