// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test fixtures.

use std::sync::Arc;

use crate::budget::HardwareParams;
use crate::server::ServerState;
use crate::store::ConfigStore;

/// Shorthand for building parameters in tests.
pub fn params(anharmonicity_mhz: f64, t1_us: f64, t2_us: f64, gate_time_ns: f64) -> HardwareParams {
    HardwareParams::new(anharmonicity_mhz, t1_us, t2_us, gate_time_ns)
}

/// Transmon used as the worked example throughout the tests:
/// alpha = -200 MHz, T1 = 37 us, T2 = 9.6 us, 20 ns gate.
pub fn reference_params() -> HardwareParams {
    params(-200.0, 37.0, 9.6, 20.0)
}

/// Store pre-populated with the reference device under `"reference"`.
pub fn seeded_store() -> Arc<ConfigStore> {
    let store = ConfigStore::new();
    store
        .save("reference", reference_params())
        .expect("reference params are valid");
    Arc::new(store)
}

/// Server state over a seeded store, strict validation.
pub fn server_state() -> Arc<ServerState> {
    Arc::new(ServerState::new(seeded_store(), true))
}
