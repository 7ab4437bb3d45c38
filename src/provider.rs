// Copyright © 2021 HQS Quantum Simulations GmbH. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the
// License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied. See the License for the specific language governing permissions and
// limitations under the License.

use crate::TestkitError;
use roqoqo::devices::{AllToAllDevice, Device};
use tracing::debug;

/// Name of the only supported provider.
pub const SIMULATOR: &str = "simulator";

/// Number of qubits of the simulated device.
const SIMULATOR_NUMBER_QUBITS: usize = 6;

/// Uniform gate time assigned to all gates of the simulated device.
const SIMULATOR_GATE_TIME: f64 = 1.0;

/// Single-qubit gates available on the simulated device.
const SINGLE_QUBIT_GATES: &[&str] = &[
    "RotateX",
    "RotateY",
    "RotateZ",
    "SqrtPauliX",
    "InvSqrtPauliX",
    "Hadamard",
    "PauliX",
    "PauliY",
    "PauliZ",
    "PhaseShiftState1",
];

/// Two-qubit gates available on the simulated device.
const TWO_QUBIT_GATES: &[&str] = &["CNOT", "ControlledPauliZ", "ControlledPhaseShift"];

/// Handle to a quantum computing backend device.
///
/// A provider owns the [roqoqo::devices::Device] describing the hardware the
/// rest of the stack targets. Only the simulated provider [SIMULATOR] is
/// supported, modelled as a small all-to-all device so that circuits targeting
/// it can always be simulated with a statevector simulator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Provider {
    name: String,
    device: AllToAllDevice,
}

impl Provider {
    /// Creates the provider registered under `name`.
    ///
    /// # Arguments
    ///
    /// `name` - The name of the quantum computing service. Only [SIMULATOR] is supported.
    ///
    /// # Returns
    ///
    /// `Ok(Provider)` - The provider handle.
    /// `Err(TestkitError::UnsupportedProvider)` - No provider is registered under `name`.
    pub fn new(name: &str) -> Result<Self, TestkitError> {
        match name {
            SIMULATOR => {
                debug!(provider = name, "instantiating simulated provider device");
                Ok(Self {
                    name: name.to_string(),
                    device: simulator_device(),
                })
            }
            _ => Err(TestkitError::UnsupportedProvider {
                value: name.to_string(),
            }),
        }
    }

    /// Returns the name the provider was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the device describing the provider hardware.
    pub fn device(&self) -> &AllToAllDevice {
        &self.device
    }

    /// Returns the number of qubits of the provider device.
    pub fn number_qubits(&self) -> usize {
        self.device.number_qubits()
    }
}

/// Builds the fixed all-to-all device standing in for simulator hardware.
fn simulator_device() -> AllToAllDevice {
    let single_qubit_gates: Vec<String> =
        SINGLE_QUBIT_GATES.iter().map(|s| s.to_string()).collect();
    let two_qubit_gates: Vec<String> = TWO_QUBIT_GATES.iter().map(|s| s.to_string()).collect();
    AllToAllDevice::new(
        SIMULATOR_NUMBER_QUBITS,
        &single_qubit_gates,
        &two_qubit_gates,
        SIMULATOR_GATE_TIME,
    )
}
