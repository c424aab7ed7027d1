//! The sampling, solving and verification loop
//!
//! A [`Detector`] drives one detection attempt through a small state
//! machine:
//!
//! ```text
//! Sampling --(rank == W)--> Solving --> Verifying(mask) --> Finished
//!    |                                                          ^
//!    +---------------------(budget exhausted)-------------------+
//! ```
//!
//! Sampling feeds oracle measurements to a fresh [`Gf2Solver`]. Rounds that
//! contradict the accepted equations are discarded and do not count against
//! the budget. Once the system has full rank its unique solution is the
//! candidate period `s`, and the probe function is checked for
//! `f(u) == f(u ^ s)` at uniformly random points.

use qfeistel_algorithms::{Gf2Solver, Insertion};
use qfeistel_api::error::validate;
use qfeistel_api::{BitFunction, Classification, DecisionReason, EquationOracle};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::DetectorConfig;
use crate::error::Result;

/// Outcome of one detection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// The verdict
    pub classification: Classification,
    /// How the verdict was reached
    pub reason: DecisionReason,
    /// Rounds whose equation was stored (independent or dependent)
    pub accepted_rounds: usize,
    /// Rounds discarded as contradictory
    pub rejected_rounds: usize,
    /// Rank reached by the solver
    pub independent_rows: usize,
    /// Packed solution `1 | (s << 1)`, if the system was solved
    pub candidate_mask: Option<u64>,
}

impl Detection {
    /// Whether the permutation was classified as a 3-round Feistel network
    pub fn is_structured(&self) -> bool {
        self.classification.is_structured()
    }
}

/// Progress of a detection attempt
#[derive(Debug)]
enum Phase {
    Sampling,
    Solving,
    Verifying(u64),
    Finished(Detection),
}

/// Round counters carried across phases
#[derive(Debug, Default)]
struct Rounds {
    accepted: usize,
    rejected: usize,
    warned: bool,
}

/// Simon-style period detector
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a detector, validating the configuration
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run one detection attempt
    ///
    /// `oracle` supplies packed equations over `config.width` unknowns and
    /// `function` is the classical mapping behind it, taking `width + 1`
    /// input bits. All randomness, for sampling and for the verification
    /// probes, comes from `rng`.
    pub fn run<O, F, R>(&self, oracle: &mut O, function: &F, rng: &mut R) -> Result<Detection>
    where
        O: EquationOracle + ?Sized,
        F: BitFunction + ?Sized,
        R: Rng + ?Sized,
    {
        let width = self.config.width;
        validate::length("Detector oracle width", oracle.width(), width)?;
        validate::length("Detector function input", function.input_bits(), width + 1)?;

        let budget = self.config.budget();
        let mut solver = Gf2Solver::new(width)?;
        let mut rounds = Rounds::default();
        let mut phase = Phase::Sampling;

        loop {
            phase = match phase {
                Phase::Sampling if rounds.accepted >= budget => {
                    warn!(budget, rank = solver.rank(), width, "sampling budget exhausted before full rank");
                    Phase::Finished(self.conclude(
                        self.config.exhausted_verdict,
                        DecisionReason::BudgetExhausted,
                        &rounds,
                        &solver,
                        None,
                    ))
                }
                Phase::Sampling => {
                    let raw = oracle.sample(rng)?;
                    match solver.insert_packed(raw)? {
                        Insertion::Inconsistent => {
                            rounds.rejected += 1;
                            debug!(sample = raw, rejected = rounds.rejected, "discarded contradictory sample");
                            if rounds.rejected > width && !rounds.warned {
                                warn!(rejected = rounds.rejected, width, "contradictory samples exceed the width");
                                rounds.warned = true;
                            }
                            Phase::Sampling
                        }
                        outcome => {
                            rounds.accepted += 1;
                            debug!(
                                sample = raw,
                                ?outcome,
                                rank = solver.rank(),
                                accepted = rounds.accepted,
                                "accepted sample"
                            );
                            if solver.is_full_rank() {
                                Phase::Solving
                            } else {
                                Phase::Sampling
                            }
                        }
                    }
                }
                Phase::Solving => Phase::Verifying(solver.solve_packed()?),
                Phase::Verifying(mask) => {
                    let periodic = self.is_period(function, mask, rng);
                    let (classification, reason) = if periodic {
                        (Classification::Structured, DecisionReason::Verified)
                    } else {
                        (Classification::Unstructured, DecisionReason::Refuted)
                    };
                    Phase::Finished(self.conclude(classification, reason, &rounds, &solver, Some(mask)))
                }
                Phase::Finished(detection) => {
                    info!(
                        classification = %detection.classification,
                        reason = %detection.reason,
                        accepted = detection.accepted_rounds,
                        rejected = detection.rejected_rounds,
                        rank = detection.independent_rows,
                        "detection finished"
                    );
                    return Ok(detection);
                }
            };
        }
    }

    /// Check `f(u) == f(u ^ mask)` at `verification_probes` random points
    fn is_period<F, R>(&self, function: &F, mask: u64, rng: &mut R) -> bool
    where
        F: BitFunction + ?Sized,
        R: Rng + ?Sized,
    {
        // width <= 63, so the domain mask never overflows
        let domain = u64::MAX >> (63 - self.config.width);
        (0..self.config.verification_probes).all(|_| {
            let u = rng.gen_range(0..=domain);
            function.evaluate(u) == function.evaluate(u ^ mask)
        })
    }

    fn conclude(
        &self,
        classification: Classification,
        reason: DecisionReason,
        rounds: &Rounds,
        solver: &Gf2Solver,
        candidate_mask: Option<u64>,
    ) -> Detection {
        Detection {
            classification,
            reason,
            accepted_rounds: rounds.accepted,
            rejected_rounds: rounds.rejected,
            independent_rows: solver.rank(),
            candidate_mask,
        }
    }
}
