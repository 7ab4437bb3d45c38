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

use crate::{Provider, Sampler, TestkitError, Transpiler, SAMPLER, SIMULATOR};
use std::fmt;
use tracing::info;

/// Configured quantum backend stack.
///
/// A backend wires three externally supplied components together: a provider
/// device, a sampling executor running against that device and a transpiler
/// pipeline targeting it. The three handles are constructed once at creation
/// and never mutated; the backend is immutable afterwards.
///
/// Two constructors are provided that differ only in whether the non-negative
/// precondition on the transpiler seed is enforced: [Backend::new] rejects a
/// negative seed, [Backend::new_unchecked] stores it verbatim. Both behaviors
/// are in use and neither has been declared authoritative, so neither is
/// silently dropped.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Backend {
    /// The name of the quantum computing service.
    pub provider: String,
    /// The kind of execution engine in use.
    pub executor: String,
    /// The seed for the transpiler. `None` if not given by the user.
    pub transpiler_seed: Option<i64>,
    /// The seed for the simulator. `None` if not given by the user.
    pub simulator_seed: Option<u64>,
    provider_handle: Provider,
    sampler: Sampler,
    transpiler: Transpiler,
}

impl Backend {
    /// Creates a new backend stack, validating the transpiler seed.
    ///
    /// # Arguments
    ///
    /// `provider` - The name of the quantum computing service (e.g. [SIMULATOR]).
    ///              Currently only supports [SIMULATOR].
    /// `executor` - The kind of execution engine to use (e.g. [SAMPLER]).
    ///              Currently only supports [SAMPLER].
    /// `transpiler_seed` - The seed for the transpiler. Must be non-negative.
    ///                     Leave `None` to use a random seed (cannot be retrieved).
    /// `simulator_seed` - The seed for the simulator.
    ///                    Leave `None` to use a random seed (cannot be retrieved).
    ///
    /// # Returns
    ///
    /// `Ok(Backend)` - The configured backend stack.
    /// `Err(TestkitError::UnsupportedProvider)` - `provider` is not supported.
    /// `Err(TestkitError::UnsupportedExecutor)` - `executor` is not implemented.
    /// `Err(TestkitError::NegativeTranspilerSeed)` - `transpiler_seed` is negative.
    pub fn new(
        provider: &str,
        executor: &str,
        transpiler_seed: Option<i64>,
        simulator_seed: Option<u64>,
    ) -> Result<Self, TestkitError> {
        if let Some(seed) = transpiler_seed {
            if seed < 0 {
                return Err(TestkitError::NegativeTranspilerSeed { seed });
            }
        }
        Self::assemble(provider, executor, transpiler_seed, simulator_seed)
    }

    /// Creates a new backend stack without validating the transpiler seed.
    ///
    /// Identical to [Backend::new] except that the non-negative precondition
    /// on `transpiler_seed` is not enforced and a negative value is stored
    /// and passed through to the transpiler.
    pub fn new_unchecked(
        provider: &str,
        executor: &str,
        transpiler_seed: Option<i64>,
        simulator_seed: Option<u64>,
    ) -> Result<Self, TestkitError> {
        Self::assemble(provider, executor, transpiler_seed, simulator_seed)
    }

    /// Returns the provider handle.
    pub fn provider_handle(&self) -> &Provider {
        &self.provider_handle
    }

    /// Returns the sampling executor handle.
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Returns the transpiler handle.
    pub fn transpiler(&self) -> &Transpiler {
        &self.transpiler
    }

    // Construction order is fixed: provider first, then the executor and the
    // transpiler which both receive the provider. Any failure aborts the whole
    // construction, no partially assembled backend is observable.
    fn assemble(
        provider: &str,
        executor: &str,
        transpiler_seed: Option<i64>,
        simulator_seed: Option<u64>,
    ) -> Result<Self, TestkitError> {
        let provider_handle = Provider::new(provider)?;
        let sampler = Sampler::new(executor, &provider_handle, simulator_seed)?;
        let transpiler = Transpiler::preset(&provider_handle, transpiler_seed);
        info!(provider, executor, "backend stack assembled");
        Ok(Self {
            provider: provider.to_string(),
            executor: executor.to_string(),
            transpiler_seed,
            simulator_seed,
            provider_handle,
            sampler,
            transpiler,
        })
    }
}

impl Default for Backend {
    /// Creates the default backend stack: simulator provider, sampler
    /// executor, no seeds.
    fn default() -> Self {
        Self::new(SIMULATOR, SAMPLER, None, None)
            .expect("default backend configuration is supported")
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Backend: provider={}, executor={}, transpiler_seed={}, simulator_seed={}>",
            self.provider,
            self.executor,
            fmt_seed(self.transpiler_seed),
            fmt_seed(self.simulator_seed),
        )
    }
}

fn fmt_seed<T: fmt::Display>(seed: Option<T>) -> String {
    match seed {
        Some(seed) => seed.to_string(),
        None => "None".to_string(),
    }
}
