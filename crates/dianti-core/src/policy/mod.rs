//! Dispatch policies: decision functions mapping a snapshot to commands.
//!
//! A policy is a pure state machine. Any memory it keeps — such as the
//! up-down sweep's per-car heading — lives on the policy value itself and is
//! threaded through `&mut self`, never hidden in globals. Given the same
//! policy state and the same snapshot, `dispatch` returns the same commands.

mod random;
mod updown;

pub use random::RandomDispatch;
pub use updown::UpDownDispatch;

use crate::state::{Command, Snapshot};

/// Produces one command per elevator for the current turn.
pub trait DispatchPolicy {
    /// Decide this turn's command for every car in `snapshot`.
    ///
    /// Implementations emit exactly one command per entry in
    /// `snapshot.elevators`, in the same order.
    fn dispatch(&mut self, snapshot: &Snapshot) -> Vec<Command>;
}
