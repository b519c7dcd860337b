//! Session state machine: handshake, turn exchange, termination.

use dianti_core::{Command, Snapshot};
use dianti_proto::{ApiRequest, Building, InitRequest, StateResponse, TurnRequest, WireCommand};

use crate::{error::ClientError, transport::Transport};

/// Everything needed to start a run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Event whose scoreboard the run belongs to.
    pub event: String,
    /// Building configuration to simulate.
    pub building: Building,
    /// Bot name shown on the scoreboard.
    pub bot: String,
    /// Contact email, used for the scoreboard avatar.
    pub email: String,
    /// Exclude the run from scoreboards and replays.
    pub sandbox: bool,
}

/// One protocol session with the simulation service.
///
/// Lifecycle: `Uninitialized → Active → Terminated`. [`Session::open`]
/// performs the first transition; observing `running = false` in any
/// response performs the second; there is no way out of `Terminated` —
/// further submissions fail with [`ClientError::SessionOver`].
///
/// The token is assigned by the init response and never changes for the
/// life of the session; the turn response's `token` field is ignored.
pub struct Session<T> {
    transport: T,
    token: String,
    num_floors: u32,
    /// Client-side turn counter, advanced before each submission. Log
    /// bookkeeping only — independent of the server's `cur_turn`.
    turn: u64,
    terminated: bool,
}

impl<T: Transport> Session<T> {
    /// Initialize a session and return it together with the first
    /// snapshot.
    pub async fn open(
        transport: T,
        config: &SessionConfig,
    ) -> Result<(Self, Snapshot), ClientError> {
        let init = InitRequest {
            bot: config.bot.clone(),
            building_name: config.building.as_str().to_owned(),
            email: config.email.clone(),
            event: config.event.clone(),
            sandbox: config.sandbox,
        };

        let response = transport.exchange(ApiRequest::Init(init)).await?;

        let mut session = Self {
            transport,
            token: response.token.clone(),
            num_floors: response.num_floors,
            turn: 0,
            terminated: false,
        };

        tracing::info!(
            building = %config.building,
            num_floors = session.num_floors,
            sandbox = config.sandbox,
            "session opened"
        );

        let snapshot = session.absorb(&response);
        Ok((session, snapshot))
    }

    /// Submit one command per elevator and return the next snapshot.
    pub async fn submit(&mut self, commands: Vec<Command>) -> Result<Snapshot, ClientError> {
        if self.terminated {
            return Err(ClientError::SessionOver);
        }

        self.turn += 1;
        tracing::debug!(turn = self.turn, commands = commands.len(), "submitting turn");

        let turn = TurnRequest {
            token: self.token.clone(),
            commands: commands.into_iter().map(WireCommand::from).collect(),
        };
        let response = self.transport.exchange(ApiRequest::Turn(turn)).await?;

        Ok(self.absorb(&response))
    }

    /// Surface advisory errors, record termination, and build the typed
    /// snapshot.
    fn absorb(&mut self, response: &StateResponse) -> Snapshot {
        for message in &response.errors {
            tracing::warn!(turn = self.turn, "server reported: {message}");
        }
        if !response.running {
            self.terminated = true;
        }
        Snapshot::from(response)
    }

    /// The token assigned at initialization.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Floor count of the selected building.
    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    /// Number of turns submitted so far.
    pub fn turns_submitted(&self) -> u64 {
        self.turn
    }

    /// True once a terminal response has been observed.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}
