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

use num_complex::Complex64;
use roqoqo::measurements::ClassicalRegister;
use roqoqo::operations;
use roqoqo::Circuit;
use roqoqo_testkit::{Backend, TestkitError, SAMPLER, SIMULATOR};
use rusty_fork::rusty_fork_test;
use test_case::test_case;

#[test]
fn test_default_construction() {
    let backend = Backend::default();
    assert_eq!(backend.provider, SIMULATOR);
    assert_eq!(backend.executor, SAMPLER);
    assert_eq!(backend.transpiler_seed, None);
    assert_eq!(backend.simulator_seed, None);
}

#[test_case(None, None; "unseeded")]
#[test_case(Some(0), Some(0); "zero seeds")]
#[test_case(Some(1234), Some(5678); "seeded")]
fn test_supported_construction(transpiler_seed: Option<i64>, simulator_seed: Option<u64>) {
    let backend = Backend::new(SIMULATOR, SAMPLER, transpiler_seed, simulator_seed).unwrap();
    assert_eq!(backend.provider, SIMULATOR);
    assert_eq!(backend.executor, SAMPLER);
    assert_eq!(backend.transpiler_seed, transpiler_seed);
    assert_eq!(backend.simulator_seed, simulator_seed);
}

#[test]
fn test_display() {
    let backend = Backend::new(SIMULATOR, SAMPLER, Some(1234), Some(5678)).unwrap();
    assert_eq!(
        backend.to_string(),
        "<Backend: provider=simulator, executor=sampler, transpiler_seed=1234, simulator_seed=5678>"
    );
    let backend = Backend::default();
    assert_eq!(
        backend.to_string(),
        "<Backend: provider=simulator, executor=sampler, transpiler_seed=None, simulator_seed=None>"
    );
}

#[test_case("ibm_quebec"; "hardware name")]
#[test_case("Simulator"; "case sensitive")]
#[test_case(""; "empty")]
fn test_unsupported_provider(provider: &str) {
    let res = Backend::new(provider, SAMPLER, None, None);
    assert_eq!(
        res.unwrap_err(),
        TestkitError::UnsupportedProvider {
            value: provider.to_string()
        }
    );
}

#[test_case("estimator"; "estimator kind")]
#[test_case("Sampler"; "case sensitive")]
#[test_case(""; "empty")]
fn test_unsupported_executor(executor: &str) {
    let res = Backend::new(SIMULATOR, executor, None, None);
    assert_eq!(
        res.unwrap_err(),
        TestkitError::UnsupportedExecutor {
            value: executor.to_string()
        }
    );
}

#[test]
fn test_error_messages_name_the_field() {
    let err = Backend::new("quebec", SAMPLER, None, None).unwrap_err();
    assert!(err.to_string().contains("provider"));
    assert!(err.to_string().contains("quebec"));
    let err = Backend::new(SIMULATOR, "estimator", None, None).unwrap_err();
    assert!(err.to_string().contains("executor"));
    assert!(err.to_string().contains("estimator"));
}

#[test]
fn test_negative_transpiler_seed_rejected() {
    let res = Backend::new(SIMULATOR, SAMPLER, Some(-1), None);
    assert_eq!(
        res.unwrap_err(),
        TestkitError::NegativeTranspilerSeed { seed: -1 }
    );
}

// The unchecked constructor deliberately skips the seed precondition and
// stores the negative value verbatim.
#[test]
fn test_negative_transpiler_seed_unchecked() {
    let backend = Backend::new_unchecked(SIMULATOR, SAMPLER, Some(-1), None).unwrap();
    assert_eq!(backend.transpiler_seed, Some(-1));
    assert_eq!(backend.transpiler().seed(), Some(-1));
}

#[test]
fn test_unchecked_still_validates_names() {
    let res = Backend::new_unchecked("quebec", SAMPLER, None, None);
    assert!(res.is_err());
    let res = Backend::new_unchecked(SIMULATOR, "estimator", None, None);
    assert!(res.is_err());
}

#[test]
fn test_seed_propagation_is_pass_through() {
    let backend_a = Backend::new(SIMULATOR, SAMPLER, Some(1234), Some(4321)).unwrap();
    let backend_b = Backend::new(SIMULATOR, SAMPLER, Some(1234), Some(4321)).unwrap();
    assert_eq!(
        backend_a.sampler().quest_backend().random_seed,
        Some(vec![4321])
    );
    assert_eq!(
        backend_a.sampler().quest_backend(),
        backend_b.sampler().quest_backend()
    );
    assert_eq!(backend_a.transpiler(), backend_b.transpiler());
}

#[test]
fn test_provider_handle() {
    let backend = Backend::default();
    assert_eq!(backend.provider_handle().name(), SIMULATOR);
    assert_eq!(backend.provider_handle().number_qubits(), 6);
}

#[test]
fn test_transpile_supported_circuit() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionBit::new("ro".to_string(), 2, true);
    circuit += operations::Hadamard::new(0);
    circuit += operations::CNOT::new(0, 1);
    circuit += operations::MeasureQubit::new(0, "ro".to_string(), 0);
    circuit += operations::MeasureQubit::new(1, "ro".to_string(), 1);
    let transpiled = backend.transpiler().transpile(&circuit).unwrap();
    assert_eq!(transpiled, circuit);
}

#[test]
fn test_transpile_unavailable_single_qubit_gate() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::TGate::new(0);
    let res = backend.transpiler().transpile(&circuit);
    assert!(matches!(
        res,
        Err(TestkitError::OperationNotAvailable { .. })
    ));
}

#[test]
fn test_transpile_unavailable_two_qubit_gate() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::MolmerSorensenXX::new(0, 1);
    let res = backend.transpiler().transpile(&circuit);
    assert!(matches!(
        res,
        Err(TestkitError::OperationNotAvailable { .. })
    ));
}

#[test]
fn test_transpile_qubit_outside_device() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::PauliX::new(7);
    let res = backend.transpiler().transpile(&circuit);
    assert!(matches!(
        res,
        Err(TestkitError::OperationNotAvailable { .. })
    ));
}

#[test]
fn test_sampler_run_deterministic_circuit() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionBit::new("ro".to_string(), 4, true);
    circuit += operations::PauliX::new(1);
    circuit += operations::PragmaRepeatedMeasurement::new("ro".to_string(), 10, None);
    let (bit_result, float_result, complex_result) = backend.sampler().run(&circuit).unwrap();
    assert!(float_result.is_empty());
    assert!(complex_result.is_empty());
    let nested_vec = bit_result.get("ro").unwrap();
    assert_eq!(nested_vec.len(), 10);
    for repetition in nested_vec {
        assert_eq!(repetition, &vec![false, true, false, false]);
    }
}

#[test]
fn test_transpile_and_run_cycle() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionBit::new("ro".to_string(), 2, true);
    circuit += operations::PauliX::new(0);
    circuit += operations::PauliX::new(1);
    circuit += operations::MeasureQubit::new(0, "ro".to_string(), 0);
    circuit += operations::MeasureQubit::new(1, "ro".to_string(), 1);
    let transpiled = backend.transpiler().transpile(&circuit).unwrap();
    let (bit_result, _, _) = backend.sampler().run(&transpiled).unwrap();
    assert_eq!(bit_result.get("ro").unwrap(), &vec![vec![true, true]]);
}

#[test]
fn test_sampler_run_measurement_registers() {
    let mut constant_circuit = Circuit::new();
    constant_circuit += operations::PauliX::new(1);
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionBit::new("ro".to_string(), 4, true);
    circuit += operations::PragmaRepeatedMeasurement::new("ro".to_string(), 10, None);
    let measurement = ClassicalRegister {
        constant_circuit: Some(constant_circuit),
        circuits: vec![circuit],
    };
    let backend = Backend::default();
    let (bit_result, _, _) = backend
        .sampler()
        .run_measurement_registers(&measurement)
        .unwrap();
    let nested_vec = bit_result.get("ro").unwrap();
    assert_eq!(nested_vec.len(), 10);
    for repetition in nested_vec {
        assert!(!repetition[0]);
        assert!(repetition[1]);
    }
}

#[test]
fn test_sampler_statevector_readout() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionComplex::new("ro".to_string(), 64, true);
    circuit += operations::PauliX::new(0);
    circuit += operations::PragmaGetStateVector::new("ro".to_string(), None);
    let (_, _, complex_result) = backend.sampler().run(&circuit).unwrap();
    let statevector = &complex_result.get("ro").unwrap()[0];
    assert_eq!(statevector.len(), 64);
    assert!((statevector[1] - Complex64::new(1.0, 0.0)).norm() < 1e-10);
}

#[test]
fn test_run_insufficient_qubits() {
    let backend = Backend::default();
    let mut circuit = Circuit::new();
    circuit += operations::DefinitionBit::new("ro".to_string(), 8, true);
    circuit += operations::PauliX::new(7);
    circuit += operations::MeasureQubit::new(7, "ro".to_string(), 7);
    let res = backend.sampler().run(&circuit);
    assert!(matches!(res, Err(TestkitError::Backend(_))));
}

rusty_fork_test! {

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut circuit = Circuit::new();
        circuit += operations::DefinitionBit::new("ro".to_string(), 3, true);
        circuit += operations::Hadamard::new(0);
        circuit += operations::Hadamard::new(1);
        circuit += operations::Hadamard::new(2);
        circuit += operations::PragmaRepeatedMeasurement::new("ro".to_string(), 5, None);

        let backend_a = Backend::new(SIMULATOR, SAMPLER, None, Some(7777)).unwrap();
        let backend_b = Backend::new(SIMULATOR, SAMPLER, None, Some(7777)).unwrap();
        let (bits_a, _, _) = backend_a.sampler().run(&circuit).unwrap();
        let (bits_b, _, _) = backend_b.sampler().run(&circuit).unwrap();
        assert_eq!(bits_a.get("ro").unwrap(), bits_b.get("ro").unwrap());
    }
}
