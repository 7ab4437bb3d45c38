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

use crate::{Provider, TestkitError};
use roqoqo::devices::{AllToAllDevice, Device};
use roqoqo::operations::{
    MultiQubitGateOperation, Operate, OperateMultiQubit, OperateSingleQubit, OperateTwoQubit,
    Operation, SingleQubitGateOperation, TwoQubitGateOperation,
};
use roqoqo::Circuit;
use std::convert::TryFrom;
use tracing::debug;

/// Settings of the preset transpiler pipeline.
///
/// The preset corresponds to the most aggressive optimization the pipeline
/// supports. All fields except the seed are fixed by [TranspilerOptions::default];
/// the seed makes otherwise stochastic passes reproducible.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranspilerOptions {
    /// Optimization level of the pipeline (0-3).
    pub optimization_level: u8,
    /// Method used to choose an initial qubit layout.
    pub layout_method: String,
    /// Method used to route two-qubit gates on the device connectivity.
    pub routing_method: String,
    /// Method used to translate gates to the device gate set.
    pub translation_method: String,
    /// Method used to schedule gates on the device.
    pub scheduling_method: String,
    /// Degree to which gates may be approximated during synthesis (1.0 = exact).
    pub approximation_degree: f64,
    /// Method used for unitary synthesis.
    pub unitary_synthesis_method: String,
    /// Optional seed for stochastic passes. `None` means a random seed
    /// (cannot be retrieved).
    pub seed: Option<i64>,
}

impl Default for TranspilerOptions {
    fn default() -> Self {
        Self {
            optimization_level: 3,
            layout_method: "sabre".to_string(),
            routing_method: "sabre".to_string(),
            translation_method: "translator".to_string(),
            scheduling_method: "asap".to_string(),
            approximation_degree: 1.0,
            unitary_synthesis_method: "default".to_string(),
            seed: None,
        }
    }
}

/// Compiler pass pipeline targeting a provider device.
///
/// The pipeline holds the preset [TranspilerOptions] and the device it
/// targets. Rewriting passes are supplied by the toolkit the circuit is run
/// with; this handle performs the device-targeting step of checking that
/// every gate operation of a circuit is available on the device, delegating
/// each check to [roqoqo::devices::Device].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transpiler {
    device: AllToAllDevice,
    options: TranspilerOptions,
}

impl Transpiler {
    /// Creates the preset transpiler pipeline for a provider device.
    ///
    /// # Arguments
    ///
    /// `provider` - The provider whose device the pipeline targets.
    /// `seed` - The optional seed for stochastic passes. Leave `None` to use
    ///          a random seed (cannot be retrieved).
    pub fn preset(provider: &Provider, seed: Option<i64>) -> Self {
        debug!(seeded = seed.is_some(), "instantiating preset transpiler");
        Self {
            device: provider.device().clone(),
            options: TranspilerOptions {
                seed,
                ..TranspilerOptions::default()
            },
        }
    }

    /// Checks a circuit against the target device and returns it for execution.
    ///
    /// Every gate operation of the circuit has to be available on the target
    /// device. Definitions, measurements and pragma operations are passed
    /// through without checks.
    ///
    /// # Arguments
    ///
    /// `circuit` - The [roqoqo::Circuit] that is transpiled.
    ///
    /// # Returns
    ///
    /// `Ok(Circuit)` - The circuit targeting the device.
    /// `Err(TestkitError::OperationNotAvailable)` - An operation in the circuit
    /// is not available on the target device.
    pub fn transpile(&self, circuit: &Circuit) -> Result<Circuit, TestkitError> {
        for op in circuit.iter() {
            self.check_availability(op)?;
        }
        Ok(circuit.clone())
    }

    /// Returns the settings of the pipeline.
    pub fn options(&self) -> &TranspilerOptions {
        &self.options
    }

    /// Returns the seed for stochastic passes.
    pub fn seed(&self) -> Option<i64> {
        self.options.seed
    }

    /// Returns the device the pipeline targets.
    pub fn device(&self) -> &AllToAllDevice {
        &self.device
    }

    fn check_availability(&self, op: &Operation) -> Result<(), TestkitError> {
        if let Ok(single) = SingleQubitGateOperation::try_from(op) {
            match self
                .device
                .single_qubit_gate_time(single.hqslang(), single.qubit())
            {
                Some(_) => Ok(()),
                None => Err(TestkitError::OperationNotAvailable {
                    hqslang: single.hqslang().to_string(),
                    msg: format!("qubit {}", single.qubit()),
                }),
            }
        } else if let Ok(two) = TwoQubitGateOperation::try_from(op) {
            match self
                .device
                .two_qubit_gate_time(two.hqslang(), two.control(), two.target())
            {
                Some(_) => Ok(()),
                None => Err(TestkitError::OperationNotAvailable {
                    hqslang: two.hqslang().to_string(),
                    msg: format!("control {} target {}", two.control(), two.target()),
                }),
            }
        } else if let Ok(multi) = MultiQubitGateOperation::try_from(op) {
            match self
                .device
                .multi_qubit_gate_time(multi.hqslang(), multi.qubits())
            {
                Some(_) => Ok(()),
                None => Err(TestkitError::OperationNotAvailable {
                    hqslang: multi.hqslang().to_string(),
                    msg: format!("qubits {:?}", multi.qubits()),
                }),
            }
        } else {
            Ok(())
        }
    }
}
