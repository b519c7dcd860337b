//! Driver loop: one session from initialization to termination.

use dianti_core::DispatchPolicy;

use crate::{
    error::ClientError,
    session::{Session, SessionConfig},
    transport::Transport,
};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Final score from the terminal snapshot.
    pub score: Option<i64>,
    /// Replay link from the terminal snapshot; intermediate snapshots
    /// never carry a meaningful one.
    pub replay_url: Option<String>,
    /// Turns submitted by the client.
    pub turns_played: u64,
}

/// Run one complete session: initialize, then dispatch and submit until
/// the server reports termination.
///
/// Each turn strictly depends on the previous response — the policy only
/// ever sees the latest snapshot, and nothing is submitted after a
/// terminal one.
pub async fn drive<T, P>(
    transport: T,
    config: &SessionConfig,
    policy: &mut P,
) -> Result<RunOutcome, ClientError>
where
    T: Transport,
    P: DispatchPolicy,
{
    let (mut session, mut snapshot) = Session::open(transport, config).await?;

    while snapshot.running {
        let commands = policy.dispatch(&snapshot);
        snapshot = session.submit(commands).await?;
    }

    let outcome = RunOutcome {
        score: snapshot.score,
        replay_url: snapshot.replay_url,
        turns_played: session.turns_submitted(),
    };

    tracing::info!(
        score = outcome.score,
        turns = outcome.turns_played,
        replay_url = outcome.replay_url.as_deref().unwrap_or("<none>"),
        "session finished"
    );

    Ok(outcome)
}
