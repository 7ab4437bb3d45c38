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

#![deny(missing_docs)]
#![warn(private_intra_doc_links)]
#![warn(missing_crate_level_docs)]
#![warn(private_doc_tests)]
#![deny(missing_debug_implementations)]

//! # roqoqo-testkit
//!
//! Preconfigured simulator stack for the [roqoqo](https://github.com/HQSquantumsimulations/qoqo)
//! quantum computing toolkit.
//!
//! roqoqo-testkit wires three externally supplied components into a single
//! [Backend] handle: a simulated provider device, a sampling executor backed by
//! the [QuEST](https://github.com/QuEST-Kit/QuEST) simulator via roqoqo-quest,
//! and a transpiler pipeline targeting the provider device. All simulation,
//! sampling and device modelling is delegated to roqoqo and roqoqo-quest;
//! this crate only selects, seeds and assembles.

mod error;
pub use error::TestkitError;
mod provider;
pub use provider::{Provider, SIMULATOR};
mod sampler;
pub use sampler::{Registers, Sampler, SAMPLER};
mod transpiler;
pub use transpiler::{Transpiler, TranspilerOptions};
mod backend;
pub use backend::Backend;
