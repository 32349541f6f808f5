#[cfg(feature = "provider-gemini")]
pub mod gemini;

#[cfg(feature = "provider-murf")]
pub mod murf;
