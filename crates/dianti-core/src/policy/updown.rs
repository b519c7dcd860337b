//! The up-down sweep policy.

use std::collections::HashMap;

use crate::{
    policy::DispatchPolicy,
    state::{Action, Command, Elevator, Heading, Snapshot},
};

/// Continuous zigzag sweep with opportunistic stops.
///
/// Each car rides to the top floor, reverses, rides back to floor 1, and
/// repeats indefinitely, stopping whenever a passenger inside wants off at
/// the current floor or a hall call matches the current floor and heading.
///
/// Cars are dispatched independently: the policy never reverses a car
/// mid-shaft for a call behind it, and it never claims a call for a
/// specific car — two cars may stop for the same call and the server
/// resolves the actual pickup.
#[derive(Debug, Clone, Default)]
pub struct UpDownDispatch {
    /// Last commanded heading per car, surviving across turns for the life
    /// of the policy value. A car not yet seen starts [`Heading::Up`].
    headings: HashMap<String, Heading>,
}

impl UpDownDispatch {
    /// Create a policy with no remembered headings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered heading for a car, if it has been dispatched before.
    pub fn heading_of(&self, elevator_id: &str) -> Option<Heading> {
        self.headings.get(elevator_id).copied()
    }

    fn plan(&mut self, elevator: &Elevator, snapshot: &Snapshot) -> Command {
        let slot = self.headings.entry(elevator.id.clone()).or_insert(Heading::Up);

        // Reverse at the boundary before deciding the action; the stored
        // value is also this turn's commanded heading.
        match *slot {
            Heading::Up if elevator.floor == snapshot.num_floors => *slot = Heading::Down,
            Heading::Down if elevator.floor == 1 => *slot = Heading::Up,
            _ => {}
        }
        let heading = *slot;

        let action = if elevator.wants_off_here() {
            Action::Stop
        } else if snapshot
            .hall_calls
            .iter()
            .any(|call| call.floor == elevator.floor && call.direction == heading)
        {
            Action::Stop
        } else {
            Action::Move
        };

        Command { elevator_id: elevator.id.clone(), heading, action }
    }
}

impl DispatchPolicy for UpDownDispatch {
    fn dispatch(&mut self, snapshot: &Snapshot) -> Vec<Command> {
        snapshot.elevators.iter().map(|elevator| self.plan(elevator, snapshot)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::HallCall;

    fn car(id: &str, floor: u32, buttons: &[u32]) -> Elevator {
        Elevator { id: id.to_owned(), floor, buttons_pressed: buttons.to_vec() }
    }

    fn snapshot(num_floors: u32, elevators: Vec<Elevator>, calls: Vec<HallCall>) -> Snapshot {
        Snapshot {
            running: true,
            score: None,
            replay_url: None,
            elevators,
            hall_calls: calls,
            num_floors,
            cur_turn: 0,
            num_turns: 30,
        }
    }

    #[test]
    fn reverses_at_top() {
        let mut policy = UpDownDispatch::new();
        let snap = snapshot(10, vec![car("elevator-0", 10, &[])], vec![]);

        let commands = policy.dispatch(&snap);
        assert_eq!(
            commands,
            vec![Command {
                elevator_id: "elevator-0".to_owned(),
                heading: Heading::Down,
                action: Action::Move,
            }]
        );
    }

    #[test]
    fn reverses_at_bottom_when_heading_down() {
        let mut policy = UpDownDispatch::new();

        // Ride to the top once so the remembered heading is Down.
        policy.dispatch(&snapshot(10, vec![car("elevator-0", 10, &[])], vec![]));
        assert_eq!(policy.heading_of("elevator-0"), Some(Heading::Down));

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 1, &[])], vec![]));
        assert_eq!(commands[0].heading, Heading::Up);
        assert_eq!(commands[0].action, Action::Move);
    }

    #[test]
    fn keeps_heading_mid_shaft() {
        let mut policy = UpDownDispatch::new();

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 5, &[])], vec![]));
        assert_eq!(commands[0].heading, Heading::Up);

        // Unchanged snapshot: the heading output is identical both times.
        let again = policy.dispatch(&snapshot(10, vec![car("elevator-0", 5, &[])], vec![]));
        assert_eq!(again[0].heading, Heading::Up);
    }

    #[test]
    fn boundary_flip_is_remembered() {
        let mut policy = UpDownDispatch::new();
        policy.dispatch(&snapshot(10, vec![car("elevator-0", 10, &[])], vec![]));

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 9, &[])], vec![]));
        assert_eq!(commands[0].heading, Heading::Down);
    }

    #[test]
    fn stops_for_passenger_inside() {
        let mut policy = UpDownDispatch::new();
        let snap = snapshot(10, vec![car("elevator-0", 5, &[5])], vec![]);

        let commands = policy.dispatch(&snap);
        assert_eq!(
            commands,
            vec![Command {
                elevator_id: "elevator-0".to_owned(),
                heading: Heading::Up,
                action: Action::Stop,
            }]
        );
    }

    #[test]
    fn stops_for_matching_hall_call() {
        let mut policy = UpDownDispatch::new();

        // Seed the memory with a Down heading by touching the top floor.
        policy.dispatch(&snapshot(10, vec![car("elevator-0", 10, &[])], vec![]));

        let calls = vec![HallCall { floor: 3, direction: Heading::Down }];
        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 3, &[])], calls));
        assert_eq!(commands[0].heading, Heading::Down);
        assert_eq!(commands[0].action, Action::Stop);
    }

    #[test]
    fn passes_hall_call_in_opposite_direction() {
        let mut policy = UpDownDispatch::new();
        let calls = vec![HallCall { floor: 5, direction: Heading::Down }];

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 5, &[])], calls));
        assert_eq!(commands[0].heading, Heading::Up);
        assert_eq!(commands[0].action, Action::Move);
    }

    #[test]
    fn moves_when_nothing_matches() {
        let mut policy = UpDownDispatch::new();
        let calls = vec![HallCall { floor: 8, direction: Heading::Up }];

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 5, &[2, 9])], calls));
        assert_eq!(commands[0].action, Action::Move);
    }

    #[test]
    fn hall_call_matching_reversed_heading_counts() {
        // The heading used for call matching is the post-reversal one.
        let mut policy = UpDownDispatch::new();
        let calls = vec![HallCall { floor: 10, direction: Heading::Down }];

        let commands = policy.dispatch(&snapshot(10, vec![car("elevator-0", 10, &[])], calls));
        assert_eq!(commands[0].heading, Heading::Down);
        assert_eq!(commands[0].action, Action::Stop);
    }

    #[test]
    fn cars_are_swept_independently() {
        let mut policy = UpDownDispatch::new();
        let snap = snapshot(
            10,
            vec![car("elevator-0", 10, &[]), car("elevator-1", 4, &[4])],
            vec![],
        );

        let commands = policy.dispatch(&snap);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].heading, Heading::Down);
        assert_eq!(commands[0].action, Action::Move);
        assert_eq!(commands[1].heading, Heading::Up);
        assert_eq!(commands[1].action, Action::Stop);
    }

    #[test]
    fn one_command_per_car_in_snapshot_order() {
        let mut policy = UpDownDispatch::new();
        let snap = snapshot(
            20,
            vec![
                car("elevator-2", 7, &[]),
                car("elevator-0", 1, &[]),
                car("elevator-1", 20, &[]),
            ],
            vec![],
        );

        let ids: Vec<_> =
            policy.dispatch(&snap).into_iter().map(|command| command.elevator_id).collect();
        assert_eq!(ids, vec!["elevator-2", "elevator-0", "elevator-1"]);
    }

    #[test]
    fn single_floor_building_oscillates() {
        // Degenerate building: the car sits at both boundaries at once, so
        // the heading flips every turn.
        let mut policy = UpDownDispatch::new();

        let first = policy.dispatch(&snapshot(1, vec![car("elevator-0", 1, &[])], vec![]));
        assert_eq!(first[0].heading, Heading::Down);

        let second = policy.dispatch(&snapshot(1, vec![car("elevator-0", 1, &[])], vec![]));
        assert_eq!(second[0].heading, Heading::Up);
    }
}
