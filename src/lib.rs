//! # session-probe
//!
//! A small diagnostic HTTP server for exercising server-side session
//! storage and the browser/server cookie contract: SameSite/Secure
//! attributes and credentialed cross-origin requests.
//!
//! ## Overview
//!
//! Four endpoints read, write, and clear a server-side session keyed by an
//! opaque identifier cookie, plus an embedded HTML page that drives them
//! with `fetch(..., { credentials: "include" })`:
//!
//! - `GET /session-test-page/` — the test page
//! - `GET /session-test/` — report session fields and the session key
//! - `POST /set-session/` — assign `currency`/`language`/`timezone`
//! - `/clear-session/` — flush the session (any method)
//!
//! ## Architecture
//!
//! - **SessionStore** trait — injected key-value storage; handlers never
//!   touch a backend directly
//! - **Session** — in-request handle with modified-flag gating and flush
//! - **cookie codec** — issues/strips the identifier cookie with the
//!   configured attributes
//! - **ProbeConfig** — bind address plus the cookie and CORS contract

pub mod api;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod server;
pub mod session;

// Re-export core types
pub use config::{CookieConfig, ProbeConfig, SameSitePolicy};
pub use error::{ProbeError, Result};
pub use session::{MemoryStore, Session, SessionKey, SessionRecord, SessionStore};
