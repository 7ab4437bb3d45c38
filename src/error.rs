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

use roqoqo::RoqoqoBackendError;
use thiserror::Error;

/// Errors that can occur when assembling or using the testkit backend stack.
#[derive(Debug, Error, PartialEq)]
pub enum TestkitError {
    /// The requested provider name is not recognized.
    ///
    /// Only the [crate::SIMULATOR] provider is supported.
    #[error("provider `{value}` is not supported")]
    UnsupportedProvider {
        /// The provider name that was requested.
        value: String,
    },
    /// The requested executor kind is not recognized.
    ///
    /// Only the [crate::SAMPLER] executor is implemented.
    #[error("executor `{value}` is not implemented")]
    UnsupportedExecutor {
        /// The executor kind that was requested.
        value: String,
    },
    /// A negative transpiler seed was passed to the validating constructor.
    #[error("transpiler seed must be non-negative, got {seed}")]
    NegativeTranspilerSeed {
        /// The offending seed value.
        seed: i64,
    },
    /// An operation in the circuit is not available on the target device.
    #[error("operation {hqslang} is not available on the target device: {msg}")]
    OperationNotAvailable {
        /// The hqslang name of the unavailable operation.
        hqslang: String,
        /// Details on the qubits the operation acts on.
        msg: String,
    },
    /// An error surfaced by the underlying simulator backend.
    #[error(transparent)]
    Backend(#[from] RoqoqoBackendError),
}
