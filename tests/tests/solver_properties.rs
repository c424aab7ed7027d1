//! Property-based tests for the online GF(2) solver

use proptest::prelude::*;
use qfeistel_algorithms::{Gf2Solver, Insertion};
use qfeistel_tests::{pack, parity, reference_rank, satisfies, seeded, solutions};
use rand::Rng;

/// A width together with packed equations over that width
fn system(max_width: usize, max_len: usize) -> impl Strategy<Value = (usize, Vec<u64>)> {
    (1..=max_width).prop_flat_map(move |width| {
        let bound = 1u64 << (width + 1);
        (Just(width), prop::collection::vec(0..bound, 0..=max_len))
    })
}

/// A full-rank solver whose unique solution is `secret`
fn solver_for_secret(width: usize, secret: u64, seed: u64) -> Gf2Solver {
    let mut rng = seeded(seed);
    let mut solver = Gf2Solver::new(width).unwrap();
    while !solver.is_full_rank() {
        let coefficients = rng.gen_range(0..1u64 << width);
        let raw = pack(coefficients, parity(coefficients & secret));
        assert!(solver.insert_packed(raw).unwrap().is_accepted());
    }
    solver
}

proptest! {
    #[test]
    fn rank_is_monotone_and_bounded((width, equations) in system(12, 40)) {
        let mut solver = Gf2Solver::new(width).unwrap();
        let mut previous = 0;

        for raw in equations {
            let outcome = solver.insert_packed(raw).unwrap();
            let rank = solver.rank();
            prop_assert!(rank <= width);
            match outcome {
                Insertion::Independent => prop_assert_eq!(rank, previous + 1),
                Insertion::Dependent | Insertion::Inconsistent => prop_assert_eq!(rank, previous),
            }
            previous = rank;
        }
        prop_assert_eq!(solver.len(), solver.rank() + solver.dependent().len());
    }

    #[test]
    fn insertion_matches_brute_force((width, equations) in system(6, 16)) {
        let mut solver = Gf2Solver::new(width).unwrap();
        let mut accepted: Vec<u64> = Vec::new();

        for raw in equations {
            let before = solutions(&accepted, width);
            let expected = if before.iter().all(|&x| satisfies(raw, x)) {
                Insertion::Dependent
            } else if before.iter().any(|&x| satisfies(raw, x)) {
                Insertion::Independent
            } else {
                Insertion::Inconsistent
            };

            let outcome = solver.insert_packed(raw).unwrap();
            prop_assert_eq!(outcome, expected);
            if outcome.is_accepted() {
                accepted.push(raw);
            }
            prop_assert_eq!(Some(solver.rank()), reference_rank(&accepted, width));
        }
    }

    #[test]
    fn solve_recovers_secret(width in 1usize..=24, secret_bits in any::<u64>(), seed in any::<u64>()) {
        let secret = secret_bits & ((1u64 << width) - 1);
        let solver = solver_for_secret(width, secret, seed);

        prop_assert_eq!(solver.solve().unwrap().to_u64().unwrap(), secret);
        prop_assert_eq!(solver.solve_packed().unwrap(), 1 | (secret << 1));
        for equation in solver.independent().iter().chain(solver.dependent()) {
            prop_assert!(satisfies(equation.pack().unwrap(), secret));
        }
    }

    #[test]
    fn full_rank_rejects_flipped_targets(width in 1usize..=16, secret_bits in any::<u64>(), coefficients_bits in any::<u64>(), seed in any::<u64>()) {
        let mask = (1u64 << width) - 1;
        let secret = secret_bits & mask;
        let coefficients = coefficients_bits & mask;
        let mut solver = solver_for_secret(width, secret, seed);

        let wrong = pack(coefficients, !parity(coefficients & secret));
        if coefficients == 0 {
            // 0 = 1 contradicts any system
            prop_assert_eq!(wrong, 1);
        }
        prop_assert_eq!(solver.insert_packed(wrong).unwrap(), Insertion::Inconsistent);
        prop_assert_eq!(solver.rank(), width);

        let right = pack(coefficients, parity(coefficients & secret));
        prop_assert_eq!(solver.insert_packed(right).unwrap(), Insertion::Dependent);
        prop_assert_eq!(solver.rank(), width);
    }

    #[test]
    fn duplicates_never_change_rank((width, equations) in system(10, 20)) {
        let mut solver = Gf2Solver::new(width).unwrap();

        for raw in equations {
            let first = solver.insert_packed(raw).unwrap();
            let rank = solver.rank();
            let second = solver.insert_packed(raw).unwrap();

            prop_assert_eq!(solver.rank(), rank);
            match first {
                Insertion::Inconsistent => prop_assert_eq!(second, Insertion::Inconsistent),
                _ => prop_assert_eq!(second, Insertion::Dependent),
            }
        }
    }
}
