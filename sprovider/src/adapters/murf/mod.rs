mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use provider::MurfProvider;
pub use transport::{MurfHttpTransport, MurfTransport};
pub use types::{MurfRequest, MurfResponse};
