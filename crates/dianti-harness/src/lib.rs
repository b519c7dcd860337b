//! Test harness for driving the dianti client against scripted servers.
//!
//! [`ScriptedTransport`] stands in for the HTTP transport: it answers each
//! exchange from a canned response queue and records every request it saw,
//! so tests can assert on the exact wire traffic a session produced. The
//! [`respond`] module builds state documents tersely.
//!
//! The harness is deliberately dumb — no physics, no scoring. Tests decide
//! the full response sequence up front, which keeps every run
//! deterministic and every assertion exact.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod respond;
mod scripted;

pub use scripted::ScriptedTransport;
