//! Browser session management and configuration
//!
//! Wraps a `headless_chrome` instance behind a small session type that owns
//! exactly one tab for the lifetime of a scrape run.

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;
