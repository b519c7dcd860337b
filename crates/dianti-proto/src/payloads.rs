//! Request and response payloads for the single API endpoint.
//!
//! Field names and shapes match the service's JSON exactly; everything here
//! is a plain mirror of the wire, with no client-side semantics attached.

use serde::{Deserialize, Serialize};

/// Session initialization payload.
///
/// The first message of a session. The server answers with a
/// [`StateResponse`] carrying the session token and the initial building
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitRequest {
    /// Bot name shown on the scoreboard.
    pub bot: String,
    /// Building configuration to simulate (see [`crate::Building`]).
    pub building_name: String,
    /// Contact email, used for the scoreboard avatar.
    pub email: String,
    /// Event whose scoreboard this run belongs to.
    pub event: String,
    /// When true, the run is excluded from scoreboards and replays.
    pub sandbox: bool,
}

/// One per-elevator instruction, flattened to wire booleans.
///
/// `direction` is `true` for up and `false` for down; `action` is `true` to
/// move and `false` to stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCommand {
    /// Elevator this instruction addresses. Unknown ids are reported back
    /// in [`StateResponse::errors`], not rejected.
    pub elevator_id: String,
    /// `true` = up, `false` = down.
    pub direction: bool,
    /// `true` = move, `false` = stop.
    pub action: bool,
}

/// Turn submission payload: one command per elevator under the session
/// token assigned at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Token returned by the init response.
    pub token: String,
    /// Commands for this turn, one per elevator.
    pub commands: Vec<WireCommand>,
}

/// Either payload accepted by the endpoint.
///
/// The service distinguishes the two by shape, so the enum is untagged: an
/// [`ApiRequest::Init`] serializes to exactly the same JSON as its inner
/// [`InitRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiRequest {
    /// Start a new session.
    Init(InitRequest),
    /// Advance an existing session by one turn.
    Turn(TurnRequest),
}

/// One elevator car as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireElevator {
    /// Stable identifier, `"elevator-0"` upward.
    pub id: String,
    /// Current floor, in `1..=num_floors`.
    pub floor: u32,
    /// Destination floors requested by passengers inside the car.
    pub buttons_pressed: Vec<u32>,
}

/// One pending hall call as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRequest {
    /// Floor the call was made on.
    pub floor: u32,
    /// `true` = the caller wants to go up, `false` = down.
    pub direction: bool,
}

/// Complete building state, returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    /// Session token. Assigned by the init response and echoed thereafter.
    pub token: String,
    /// `false` exactly once, on the terminal turn.
    pub running: bool,
    /// Cumulative score. Absent on intermediate turns in some server
    /// versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Replay link. Only meaningful on the terminal turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replay_url: Option<String>,
    /// Advisory diagnostics, e.g. a command naming an unknown elevator.
    /// Never fatal.
    #[serde(default)]
    pub errors: Vec<String>,
    /// All elevator cars in the building.
    pub elevators: Vec<WireElevator>,
    /// Outstanding hall calls.
    pub requests: Vec<WireRequest>,
    /// Floor count; valid floors are `1..=num_floors`.
    pub num_floors: u32,
    /// Server-side turn counter (independent of client bookkeeping).
    pub cur_turn: u32,
    /// Turn limit for this building.
    pub num_turns: u32,
}
