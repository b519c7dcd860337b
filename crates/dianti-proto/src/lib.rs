//! Wire protocol types for the dianti elevator simulation API.
//!
//! The remote service exposes a single HTTP endpoint taking JSON bodies:
//! the first POST of a session carries an [`InitRequest`], every later POST
//! carries a [`TurnRequest`], and both are answered with a full
//! [`StateResponse`]. Directions and actions travel as raw booleans on the
//! wire (`true` = up / move); typed equivalents live in `dianti-core`.
//!
//! # Components
//!
//! - [`ApiRequest`]: either payload accepted by the endpoint
//! - [`StateResponse`]: complete building state, returned every turn
//! - [`Building`]: catalog of server-defined building configurations

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod building;
mod payloads;

pub use building::{Building, UnknownBuilding};
pub use payloads::{
    ApiRequest, InitRequest, StateResponse, TurnRequest, WireCommand, WireElevator, WireRequest,
};
