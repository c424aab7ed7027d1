//! One-call entry points for running the distinguisher against a permutation

use qfeistel_algorithms::{PeriodProbe, SimonOracle};
use qfeistel_api::error::validate;
use qfeistel_api::KeyedPermutation;
use rand::Rng;
use tracing::info;

use crate::config::DetectorConfig;
use crate::detector::{Detection, Detector};
use crate::error::Result;

/// Tally of classifications over repeated trials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    /// Trials classified as a 3-round Feistel network
    pub structured: usize,
    /// Trials classified as a random permutation
    pub unstructured: usize,
}

impl TrialSummary {
    /// Number of trials run
    pub fn total(&self) -> usize {
        self.structured + self.unstructured
    }

    /// Fraction of trials classified as structured, `0.0` for no trials
    pub fn structured_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.structured as f64 / total as f64,
        }
    }

    fn record(&mut self, detection: &Detection) {
        if detection.is_structured() {
            self.structured += 1;
        } else {
            self.unstructured += 1;
        }
    }
}

/// Run one detection against `permutation`
///
/// Draws the probe constants `alpha` and `beta` from `rng`, tabulates the
/// probe function for the sampling oracle and runs a [`Detector`] with
/// `config`. The permutation's half width must equal `config.width`.
pub fn distinguish<P, R>(permutation: P, config: &DetectorConfig, rng: &mut R) -> Result<Detection>
where
    P: KeyedPermutation,
    R: Rng + ?Sized,
{
    let detector = Detector::new(config.clone())?;
    validate::length("distinguish half width", permutation.half_bits(), config.width)?;

    let probe = PeriodProbe::random(permutation, rng)?;
    let mut oracle = SimonOracle::new(&probe)?;
    detector.run(&mut oracle, &probe, rng)
}

/// Run `trials` detections, each against a fresh permutation from `make_permutation`
pub fn run_trials<P, M, R>(
    trials: usize,
    mut make_permutation: M,
    config: &DetectorConfig,
    rng: &mut R,
) -> Result<TrialSummary>
where
    P: KeyedPermutation,
    M: FnMut(&mut R) -> qfeistel_api::Result<P>,
    R: Rng + ?Sized,
{
    let mut summary = TrialSummary::default();
    for _ in 0..trials {
        let permutation = make_permutation(rng)?;
        let detection = distinguish(permutation, config, rng)?;
        summary.record(&detection);
    }

    info!(
        trials,
        structured = summary.structured,
        unstructured = summary.unstructured,
        "trials finished"
    );
    Ok(summary)
}
