//! Fuzz target for state document decoding.
//!
//! Arbitrary bytes go through the JSON decoder; any document that decodes
//! continues into snapshot conversion and one dispatch round. Garbage must
//! be rejected with an error, never a panic.

#![no_main]

use dianti_core::{DispatchPolicy, Snapshot, UpDownDispatch};
use dianti_proto::StateResponse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(response) = serde_json::from_slice::<StateResponse>(data) else {
        return;
    };

    let snapshot = Snapshot::from(&response);
    let mut policy = UpDownDispatch::new();
    let commands = policy.dispatch(&snapshot);
    assert_eq!(commands.len(), snapshot.elevators.len());
});
