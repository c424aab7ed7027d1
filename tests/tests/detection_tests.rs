//! Integration tests for the detection procedure and the constructions it probes

use qfeistel_algorithms::{
    FeistelNetwork, Gf2Solver, Insertion, PeriodProbe, PermutationTable, RoundFunction, SimonOracle,
};
use qfeistel_api::{BitFunction, Classification, DecisionReason, EquationOracle, Error, InvertiblePermutation, KeyedPermutation};
use qfeistel_detect::{distinguish, run_trials, Detector, DetectorConfig};
use qfeistel_tests::{bits, pack, parity, seeded};

const TRIALS: usize = 32;

#[test]
fn test_three_equation_scenario() {
    let mut solver = Gf2Solver::new(3).unwrap();
    assert_eq!(solver.insert_packed(pack(bits("110"), false)).unwrap(), Insertion::Independent);
    assert_eq!(solver.insert_packed(pack(bits("011"), false)).unwrap(), Insertion::Independent);

    // 101 = 110 ^ 011, whose targets sum to 0, so 101 = 1 contradicts them
    assert_eq!(
        solver.add_packed(pack(bits("101"), true)),
        Err(Error::InconsistentEquation { rank: 2 })
    );
    assert_eq!(solver.rank(), 2);

    // A consistent third row completes the system with s = 100
    let mut solver = Gf2Solver::new(3).unwrap();
    for raw in [pack(bits("110"), true), pack(bits("011"), false), pack(bits("111"), true)] {
        assert_eq!(solver.add_packed(raw).unwrap(), Insertion::Independent);
    }
    assert_eq!(solver.rank(), 3);
    assert_eq!(solver.solve().unwrap().to_string(), "100");
    assert_eq!(solver.solve_packed().unwrap(), 1 | (bits("100") << 1));
}

#[test]
fn test_repeated_coefficients_with_opposite_targets() {
    let mut solver = Gf2Solver::new(3).unwrap();
    solver.add_packed(pack(bits("100"), false)).unwrap();
    assert!(matches!(
        solver.add_packed(pack(bits("100"), true)),
        Err(Error::InconsistentEquation { .. })
    ));
    assert_eq!(solver.rank(), 1);
}

#[test]
fn test_feistel_roundtrip_at_eight_bit_halves() {
    let mut rng = seeded(1);
    let network = FeistelNetwork::random_three_round(8, &mut rng).unwrap();
    assert_eq!(network.block_bits(), 16);
    assert_eq!(network.name(), "Feistel network");
    for x in 0..1u64 << 16 {
        assert_eq!(network.decrypt(network.encrypt(x)), x);
    }
}

#[test]
fn test_feistel_probe_samples_satisfy_period() {
    let mut rng = seeded(2);
    let network = FeistelNetwork::random_three_round(8, &mut rng).unwrap();
    let probe = PeriodProbe::random(&network, &mut rng).unwrap();
    let (alpha, beta) = probe.constants();

    let k0 = network.round_keys().as_slice()[0];
    let f1 = |m: u64| network.round_function().apply(m, k0) & 0xff;
    let period = 1 | ((f1(alpha) ^ f1(beta)) << 1);

    let mut oracle = SimonOracle::new(&probe).unwrap();
    assert_eq!(oracle.width(), 8);
    for _ in 0..500 {
        let y = oracle.sample(&mut rng).unwrap();
        assert!(!parity(y & period), "sample {:#x} breaks period {:#x}", y, period);
    }
    assert_eq!(probe.evaluate(0x5a), probe.evaluate(0x5a ^ period));
}

#[test]
fn test_feistel_networks_are_structured() {
    let mut rng = seeded(42);
    let config = DetectorConfig::default();
    let summary = run_trials(
        TRIALS,
        |rng| FeistelNetwork::random_three_round(8, rng),
        &config,
        &mut rng,
    )
    .unwrap();
    assert_eq!(summary.structured, TRIALS, "{:?}", summary);
}

#[test]
fn test_random_permutations_are_unstructured() {
    let mut rng = seeded(42);
    let config = DetectorConfig::default();
    let summary = run_trials(TRIALS, |rng| PermutationTable::random(16, rng), &config, &mut rng).unwrap();
    assert!(summary.unstructured >= 24, "{:?}", summary);
}

#[test]
fn test_random_permutation_detection_fields() {
    let mut rng = seeded(9);
    let table = PermutationTable::random(16, &mut rng).unwrap();
    let detection = distinguish(&table, &DetectorConfig::default(), &mut rng).unwrap();

    assert!(detection.accepted_rounds <= 16);
    assert!(detection.independent_rows <= 8);
    match detection.reason {
        DecisionReason::BudgetExhausted => assert_eq!(detection.candidate_mask, None),
        _ => assert_eq!(detection.independent_rows, 8),
    }
}

#[test]
fn test_detector_over_explicit_oracle() {
    let mut rng = seeded(5);
    let network = FeistelNetwork::random_three_round(6, &mut rng).unwrap();
    let probe = PeriodProbe::new(&network, 0x01, 0x2e).unwrap();
    let mut oracle = SimonOracle::new(&probe).unwrap();

    let detector = Detector::new(DetectorConfig::for_half_bits(6).with_verification_probes(8)).unwrap();
    let detection = detector.run(&mut oracle, &probe, &mut rng).unwrap();
    assert_eq!(detection.classification, Classification::Structured);
    assert_eq!(detection.rejected_rounds, 0);
}
