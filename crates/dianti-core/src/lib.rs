//! Core domain model and dispatch policies for the dianti driver.
//!
//! # Architecture
//!
//! ```text
//! dianti-core
//!   ├─ state    (typed per-turn view: Snapshot, Elevator, HallCall, Command)
//!   └─ policy   (DispatchPolicy trait, UpDownDispatch, RandomDispatch)
//! ```
//!
//! Everything in this crate is synchronous and I/O-free. A policy plus a
//! snapshot fully determines the commands for a turn, so the decision logic
//! is testable without a live session; the protocol plumbing lives in
//! `dianti-client`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod policy;
mod state;

pub use policy::{DispatchPolicy, RandomDispatch, UpDownDispatch};
pub use state::{Action, Command, Elevator, HallCall, Heading, Snapshot};
