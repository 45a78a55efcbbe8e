//! Admin panel client for the users API
//!
//! Lists users in two tables (administrators and everyone else) and
//! creates, edits and deletes them through a form. The page, the HTTP
//! transport and the confirmation prompt are injected, so the same client
//! drives the terminal host and the tests.

pub mod api;
pub mod client;
pub mod confirm;
pub mod console;
pub mod document;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;
pub mod transport;
pub mod validation;

pub use api::UsersEndpoint;
pub use client::{AdminPanelClient, DeleteOutcome, EditOutcome, FetchOutcome, SaveOutcome};
pub use document::{Document, MemoryDocument};
pub use error::{PanelError, PanelResult, TransportError};
pub use models::{User, UserId, UserPayload};
pub use transport::{HttpTransport, Transport};
