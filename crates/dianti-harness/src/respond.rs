//! Terse builders for state documents.

use dianti_proto::{StateResponse, WireElevator, WireRequest};

/// Fluent builder for a [`StateResponse`].
///
/// Starts from a quiet 10-floor building with no cars, no calls, and no
/// score; tests add only what they assert on.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    response: StateResponse,
}

impl ResponseBuilder {
    /// A mid-run response under the given session token.
    pub fn running(token: &str) -> Self {
        Self {
            response: StateResponse {
                token: token.to_owned(),
                running: true,
                score: None,
                replay_url: None,
                errors: vec![],
                elevators: vec![],
                requests: vec![],
                num_floors: 10,
                cur_turn: 0,
                num_turns: 30,
            },
        }
    }

    /// A terminal response (`running = false`) under the given token.
    pub fn terminal(token: &str) -> Self {
        let mut builder = Self::running(token);
        builder.response.running = false;
        builder
    }

    /// Set the cumulative score.
    pub fn score(mut self, score: i64) -> Self {
        self.response.score = Some(score);
        self
    }

    /// Set the replay link.
    pub fn replay_url(mut self, url: &str) -> Self {
        self.response.replay_url = Some(url.to_owned());
        self
    }

    /// Append one advisory error string.
    pub fn error(mut self, message: &str) -> Self {
        self.response.errors.push(message.to_owned());
        self
    }

    /// Append one elevator car.
    pub fn elevator(mut self, id: &str, floor: u32, buttons: &[u32]) -> Self {
        self.response.elevators.push(WireElevator {
            id: id.to_owned(),
            floor,
            buttons_pressed: buttons.to_vec(),
        });
        self
    }

    /// Append one hall call (`up = true` means the caller wants to go up).
    pub fn call(mut self, floor: u32, up: bool) -> Self {
        self.response.requests.push(WireRequest { floor, direction: up });
        self
    }

    /// Set the floor count.
    pub fn floors(mut self, num_floors: u32) -> Self {
        self.response.num_floors = num_floors;
        self
    }

    /// Set the server-side turn counters.
    pub fn turns(mut self, cur_turn: u32, num_turns: u32) -> Self {
        self.response.cur_turn = cur_turn;
        self.response.num_turns = num_turns;
        self
    }

    /// Finish the document.
    pub fn build(self) -> StateResponse {
        self.response
    }
}
