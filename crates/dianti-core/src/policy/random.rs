//! Baseline policy choosing uniformly at random.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    policy::DispatchPolicy,
    state::{Action, Command, Heading, Snapshot},
};

/// Chooses heading and action independently and uniformly (50/50) for every
/// car, every turn.
///
/// Keeps no memory and reads nothing from the snapshot but the car ids.
/// Useful as a scoring baseline and as a stress test of the server's
/// command validation.
#[derive(Debug, Clone)]
pub struct RandomDispatch<R> {
    rng: R,
}

impl<R: Rng> RandomDispatch<R> {
    /// Build from any RNG. Tests pass a seeded generator for determinism.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDispatch<StdRng> {
    /// Build with an OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DispatchPolicy for RandomDispatch<R> {
    fn dispatch(&mut self, snapshot: &Snapshot) -> Vec<Command> {
        snapshot
            .elevators
            .iter()
            .map(|elevator| Command {
                elevator_id: elevator.id.clone(),
                heading: Heading::from_wire(self.rng.gen_bool(0.5)),
                action: Action::from_wire(self.rng.gen_bool(0.5)),
            })
            .collect()
    }
}
