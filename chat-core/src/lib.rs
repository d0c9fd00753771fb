//! Chat pipeline shared by every front-end of the résumé assistant.
//!
//! The crate owns conversation state and the request/response cycle against
//! `POST /api/chat`, and turns assistant text into tagged spans. Anything that
//! touches a browser or a socket lives behind the traits in [`session`],
//! [`thread`] and [`dispatcher`].

pub mod dispatcher;
pub mod errors;
pub mod highlight;
pub mod models;
pub mod session;
pub mod thread;
pub mod triggers;

pub use dispatcher::{ChatTransport, Dispatcher, SendOutcome, TransportResponse};
pub use errors::{ChatError, TransportError};
pub use highlight::{Category, Chunk, Highlighter, Segment, follow_up_prompt};
pub use models::{ChatRequest, ChatResponse, ErrorBody};
pub use session::{MemorySessionStore, SessionIdentity, SessionStore};
pub use thread::{Message, MemoryThreadStore, Role, ThreadState, ThreadStore};
pub use triggers::{ChatBus, ChatSurface, NoopSurface, STARTER_PROMPTS};
