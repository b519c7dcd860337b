//! Driver loop tests against a scripted server.

use dianti_client::{ClientError, SessionConfig, TransportError, drive};
use dianti_core::UpDownDispatch;
use dianti_harness::{ScriptedTransport, respond::ResponseBuilder};
use dianti_proto::{ApiRequest, Building, TurnRequest};

fn config() -> SessionConfig {
    SessionConfig {
        event: "secondspace2025".to_owned(),
        building: Building::TinyRandom,
        bot: "updown".to_owned(),
        email: "bob@mail.com".to_owned(),
        sandbox: true,
    }
}

fn turn(request: &ApiRequest) -> &TurnRequest {
    match request {
        ApiRequest::Turn(turn) => turn,
        ApiRequest::Init(_) => panic!("expected a turn payload"),
    }
}

#[tokio::test]
async fn plays_until_the_server_stops_running() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123").elevator("elevator-0", 1, &[]).build(),
        ResponseBuilder::running("abc123").elevator("elevator-0", 2, &[]).turns(1, 30).build(),
        ResponseBuilder::terminal("abc123")
            .score(1090)
            .replay_url("https://dianti.secondspace.dev/replay/abc123")
            .turns(2, 30)
            .build(),
    ]);

    let mut policy = UpDownDispatch::new();
    let outcome = drive(transport.clone(), &config(), &mut policy).await.unwrap();

    assert_eq!(outcome.turns_played, 2);
    assert_eq!(outcome.score, Some(1090));
    assert_eq!(
        outcome.replay_url.as_deref(),
        Some("https://dianti.secondspace.dev/replay/abc123")
    );

    // One init exchange, then exactly one turn exchange per played turn.
    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(matches!(requests[0], ApiRequest::Init(_)));
    assert!(requests[1..].iter().all(|request| matches!(request, ApiRequest::Turn(_))));
}

#[tokio::test]
async fn stops_immediately_when_the_first_snapshot_is_terminal() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::terminal("abc123").score(0).build(),
    ]);

    let mut policy = UpDownDispatch::new();
    let outcome = drive(transport.clone(), &config(), &mut policy).await.unwrap();

    assert_eq!(outcome.turns_played, 0);
    assert_eq!(transport.exchanges(), 1);
}

#[tokio::test]
async fn commands_cross_the_wire_flattened() {
    // Car at the top of a 10-floor building: the sweep reverses, no stop
    // condition holds, so the wire sees direction=false action=true.
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123").elevator("elevator-0", 10, &[]).build(),
        ResponseBuilder::terminal("abc123").build(),
    ]);

    let mut policy = UpDownDispatch::new();
    drive(transport.clone(), &config(), &mut policy).await.unwrap();

    let requests = transport.requests();
    let commands = &turn(&requests[1]).commands;
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].elevator_id, "elevator-0");
    assert!(!commands[0].direction);
    assert!(commands[0].action);
}

#[tokio::test]
async fn sweep_heading_persists_across_turns() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123").elevator("elevator-0", 10, &[]).build(),
        ResponseBuilder::running("abc123").elevator("elevator-0", 9, &[]).turns(1, 30).build(),
        ResponseBuilder::terminal("abc123").turns(2, 30).build(),
    ]);

    let mut policy = UpDownDispatch::new();
    drive(transport.clone(), &config(), &mut policy).await.unwrap();

    let requests = transport.requests();
    // Reversed at the top on turn 1, still heading down on turn 2.
    assert!(!turn(&requests[1]).commands[0].direction);
    assert!(!turn(&requests[2]).commands[0].direction);
}

#[tokio::test]
async fn one_command_per_elevator_each_turn() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123")
            .elevator("elevator-0", 1, &[])
            .elevator("elevator-1", 7, &[7])
            .build(),
        ResponseBuilder::terminal("abc123").build(),
    ]);

    let mut policy = UpDownDispatch::new();
    drive(transport.clone(), &config(), &mut policy).await.unwrap();

    let requests = transport.requests();
    let commands = &turn(&requests[1]).commands;
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].elevator_id, "elevator-0");
    assert_eq!(commands[1].elevator_id, "elevator-1");
    // elevator-1 has a passenger wanting off at its floor.
    assert!(!commands[1].action);
}

#[tokio::test]
async fn advisory_errors_do_not_stop_the_loop() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123").elevator("elevator-0", 1, &[]).build(),
        ResponseBuilder::running("abc123")
            .elevator("elevator-0", 2, &[])
            .error("Unknown elevator ID: elevator-X")
            .build(),
        ResponseBuilder::terminal("abc123").score(40).build(),
    ]);

    let mut policy = UpDownDispatch::new();
    let outcome = drive(transport.clone(), &config(), &mut policy).await.unwrap();

    assert_eq!(outcome.turns_played, 2);
    assert_eq!(outcome.score, Some(40));
}

#[tokio::test]
async fn transport_failure_aborts_the_run() {
    let transport = ScriptedTransport::with_responses([
        ResponseBuilder::running("abc123").elevator("elevator-0", 1, &[]).build(),
    ]);

    let mut policy = UpDownDispatch::new();
    let err = drive(transport, &config(), &mut policy).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Exhausted { .. })
    ));
}
