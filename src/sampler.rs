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
use roqoqo::backends::EvaluatingBackend;
use roqoqo::measurements::Measure;
use roqoqo::registers::{BitOutputRegister, ComplexOutputRegister, FloatOutputRegister};
use roqoqo::Circuit;
use std::collections::HashMap;
use tracing::debug;

/// Name of the only implemented executor kind.
pub const SAMPLER: &str = "sampler";

/// Type of registers returned from a run of a Circuit.
pub type Registers = (
    HashMap<String, BitOutputRegister>,
    HashMap<String, FloatOutputRegister>,
    HashMap<String, ComplexOutputRegister>,
);

/// Sampling execution engine.
///
/// Runs circuits against a provider device and returns sampled measurement
/// outcomes. Execution is delegated to the QuEST simulator through
/// [roqoqo_quest::Backend]; the sampler only sizes the simulator to the
/// provider device and passes the seed through.
///
/// If different instances of the sampler are running in parallel, the results
/// won't be deterministic, even with a seed set.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sampler {
    backend: roqoqo_quest::Backend,
    seed: Option<u64>,
}

impl Sampler {
    /// Creates the executor registered under `executor` for a provider.
    ///
    /// # Arguments
    ///
    /// `executor` - The kind of execution engine. Only [SAMPLER] is implemented.
    /// `provider` - The provider whose device the executor runs against.
    /// `seed` - The optional seed for the simulator. Leave `None` to sample
    ///          with a random seed (cannot be retrieved).
    ///
    /// # Returns
    ///
    /// `Ok(Sampler)` - The executor handle.
    /// `Err(TestkitError::UnsupportedExecutor)` - No executor is registered under `executor`.
    pub fn new(
        executor: &str,
        provider: &Provider,
        seed: Option<u64>,
    ) -> Result<Self, TestkitError> {
        match executor {
            SAMPLER => {
                debug!(
                    executor,
                    number_qubits = provider.number_qubits(),
                    seeded = seed.is_some(),
                    "instantiating sampler"
                );
                Ok(Self {
                    backend: roqoqo_quest::Backend::new(
                        provider.number_qubits(),
                        seed.map(|s| vec![s]),
                    ),
                    seed,
                })
            }
            _ => Err(TestkitError::UnsupportedExecutor {
                value: executor.to_string(),
            }),
        }
    }

    /// Runs a circuit on the simulator and returns the output registers.
    ///
    /// # Arguments
    ///
    /// `circuit` - The [roqoqo::Circuit] that is run.
    pub fn run(&self, circuit: &Circuit) -> Result<Registers, TestkitError> {
        Ok(self.backend.run_circuit(circuit)?)
    }

    /// Runs all circuits of a measurement and returns the combined output registers.
    ///
    /// # Arguments
    ///
    /// `measurement` - The [roqoqo::measurements::Measure] measurement that is run.
    pub fn run_measurement_registers<T>(&self, measurement: &T) -> Result<Registers, TestkitError>
    where
        T: Measure,
    {
        Ok(self.backend.run_measurement_registers(measurement)?)
    }

    /// Returns the seed the simulator was configured with.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the underlying QuEST simulator backend.
    pub fn quest_backend(&self) -> &roqoqo_quest::Backend {
        &self.backend
    }
}
