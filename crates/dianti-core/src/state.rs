//! Typed per-turn view of the building.
//!
//! The wire encodes direction and action as raw booleans; this module
//! replaces them with two-variant enums so a flipped polarity is a type
//! error rather than a silent bug. `true` on the wire maps to [`Heading::Up`]
//! and [`Action::Move`].

use dianti_proto::{StateResponse, WireCommand, WireElevator, WireRequest};

/// Travel direction of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Toward higher floors (`true` on the wire).
    Up,
    /// Toward floor 1 (`false` on the wire).
    Down,
}

impl Heading {
    /// Decode the wire boolean.
    pub fn from_wire(raw: bool) -> Self {
        if raw { Self::Up } else { Self::Down }
    }

    /// Encode for the wire.
    pub fn to_wire(self) -> bool {
        matches!(self, Self::Up)
    }

    /// The opposite heading.
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// What a car does this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Keep moving in the commanded heading (`true` on the wire).
    Move,
    /// Halt at the current floor to exchange passengers (`false` on the
    /// wire). Waiting passengers only board a stopped car headed their way.
    Stop,
}

impl Action {
    /// Decode the wire boolean.
    pub fn from_wire(raw: bool) -> Self {
        if raw { Self::Move } else { Self::Stop }
    }

    /// Encode for the wire.
    pub fn to_wire(self) -> bool {
        matches!(self, Self::Move)
    }
}

/// One elevator car: its position and the destinations requested inside it.
///
/// Owned and mutated exclusively by the server; the client holds a
/// read-only copy per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    /// Stable identifier, `"elevator-0"` upward.
    pub id: String,
    /// Current floor, in `1..=num_floors`.
    pub floor: u32,
    /// Destination floors requested by passengers inside the car.
    pub buttons_pressed: Vec<u32>,
}

impl Elevator {
    /// True when a passenger inside wants off at the current floor.
    pub fn wants_off_here(&self) -> bool {
        self.buttons_pressed.contains(&self.floor)
    }
}

impl From<WireElevator> for Elevator {
    fn from(wire: WireElevator) -> Self {
        Self { id: wire.id, floor: wire.floor, buttons_pressed: wire.buttons_pressed }
    }
}

/// A pending call button press on some floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallCall {
    /// Floor the call was made on.
    pub floor: u32,
    /// Direction the caller wants to travel.
    pub direction: Heading,
}

impl From<WireRequest> for HallCall {
    fn from(wire: WireRequest) -> Self {
        Self { floor: wire.floor, direction: Heading::from_wire(wire.direction) }
    }
}

/// The client's decision for one car this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Car this command addresses.
    pub elevator_id: String,
    /// Commanded travel direction.
    pub heading: Heading,
    /// Move or stop.
    pub action: Action,
}

impl From<Command> for WireCommand {
    fn from(command: Command) -> Self {
        Self {
            elevator_id: command.elevator_id,
            direction: command.heading.to_wire(),
            action: command.action.to_wire(),
        }
    }
}

/// Immutable view of the building at the start of a turn.
///
/// Advisory error strings are deliberately absent: the session layer
/// surfaces them, and dispatch never reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// `false` exactly once, on the terminal turn.
    pub running: bool,
    /// Cumulative score, when the server reported one.
    pub score: Option<i64>,
    /// Replay link; only meaningful on the terminal snapshot.
    pub replay_url: Option<String>,
    /// All cars in the building.
    pub elevators: Vec<Elevator>,
    /// Outstanding hall calls.
    pub hall_calls: Vec<HallCall>,
    /// Floor count; valid floors are `1..=num_floors`.
    pub num_floors: u32,
    /// Server-side turn counter.
    pub cur_turn: u32,
    /// Turn limit for this building.
    pub num_turns: u32,
}

impl From<&StateResponse> for Snapshot {
    fn from(response: &StateResponse) -> Self {
        Self {
            running: response.running,
            score: response.score,
            replay_url: response.replay_url.clone(),
            elevators: response.elevators.iter().cloned().map(Elevator::from).collect(),
            hall_calls: response.requests.iter().cloned().map(HallCall::from).collect(),
            num_floors: response.num_floors,
            cur_turn: response.cur_turn,
            num_turns: response.num_turns,
        }
    }
}
