//! Session protocol and driver loop for the dianti elevator simulation.
//!
//! # Architecture
//!
//! ```text
//! dianti-client
//!   ├─ Transport     (seam: one POST exchange; HttpTransport in production)
//!   ├─ Session       (token, floor count, turn counter, termination guard)
//!   └─ drive         (snapshot → policy → commands → submit, until done)
//! ```
//!
//! Data flows one direction per turn: session → snapshot → policy →
//! commands → session. Turns are strictly sequential request/response
//! pairs; there is never more than one outstanding request, so nothing here
//! needs synchronization.
//!
//! Failures come in two tiers. Transport failures (non-success status,
//! malformed body) are fatal: the run cannot continue without a valid
//! snapshot and there is no retry. Advisory strings in a response's
//! `errors` field are logged at warn level and otherwise ignored.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod session;
mod transport;

pub use driver::{RunOutcome, drive};
pub use error::ClientError;
pub use session::{Session, SessionConfig};
pub use transport::{DEFAULT_API_URL, HttpTransport, Transport, TransportError};
