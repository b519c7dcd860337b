//! Fuzz target for the up-down sweep policy.
//!
//! # Strategy
//!
//! - Arbitrary turn sequences: buildings of arbitrary size, cars on
//!   arbitrary floors, arbitrary buttons and hall calls
//! - One policy instance across the whole sequence, so heading memory is
//!   exercised turn over turn
//! - Duplicate and colliding car ids, floors outside the building
//!
//! # Invariants
//!
//! - Exactly one command per car, in snapshot order
//! - In a multi-floor building, a car at floor 1 is commanded Up and a car
//!   at the top floor is commanded Down
//! - A car whose passengers want off here always stops
//! - A car with no button match and no call match on its commanded heading
//!   always moves
//! - NEVER panic, whatever the server claims the building looks like

#![no_main]

use arbitrary::Arbitrary;
use dianti_core::{
    Action, DispatchPolicy, Elevator, HallCall, Heading, Snapshot, UpDownDispatch,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCar {
    id: u8,
    floor: u32,
    buttons: Vec<u32>,
}

#[derive(Debug, Arbitrary)]
struct FuzzTurn {
    cars: Vec<FuzzCar>,
    calls: Vec<(u32, bool)>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    num_floors: u32,
    turns: Vec<FuzzTurn>,
}

fuzz_target!(|input: FuzzInput| {
    let mut policy = UpDownDispatch::new();

    for fuzz_turn in &input.turns {
        let snapshot = Snapshot {
            running: true,
            score: None,
            replay_url: None,
            elevators: fuzz_turn
                .cars
                .iter()
                .map(|car| Elevator {
                    id: format!("elevator-{}", car.id),
                    floor: car.floor,
                    buttons_pressed: car.buttons.clone(),
                })
                .collect(),
            hall_calls: fuzz_turn
                .calls
                .iter()
                .map(|&(floor, up)| HallCall { floor, direction: Heading::from_wire(up) })
                .collect(),
            num_floors: input.num_floors,
            cur_turn: 0,
            num_turns: 0,
        };

        let commands = policy.dispatch(&snapshot);
        assert_eq!(commands.len(), snapshot.elevators.len());

        for (car, command) in snapshot.elevators.iter().zip(&commands) {
            assert_eq!(command.elevator_id, car.id);

            if input.num_floors > 1 {
                if car.floor == 1 {
                    assert_eq!(command.heading, Heading::Up);
                }
                if car.floor == input.num_floors {
                    assert_eq!(command.heading, Heading::Down);
                }
            }

            let call_here = snapshot
                .hall_calls
                .iter()
                .any(|call| call.floor == car.floor && call.direction == command.heading);

            if car.wants_off_here() {
                assert_eq!(command.action, Action::Stop);
            } else if !call_here {
                assert_eq!(command.action, Action::Move);
            }
        }
    }
});
