//! Simon-style detection of three-round Feistel networks
//!
//! The detector samples linear equations about a hidden period from an
//! [`EquationOracle`](qfeistel_api::EquationOracle), solves them with the
//! online GF(2) solver and checks the solution against the classical probe
//! function. A three-round Feistel network yields a probe with a genuine
//! period; a random permutation does not.
//!
//! ```no_run
//! use qfeistel_algorithms::FeistelNetwork;
//! use qfeistel_detect::{distinguish, DetectorConfig};
//! use rand::rngs::OsRng;
//!
//! let network = FeistelNetwork::random_three_round(8, &mut OsRng)?;
//! let detection = distinguish(&network, &DetectorConfig::default(), &mut OsRng)?;
//! println!("{}", detection.classification);
//! # Ok::<(), qfeistel_detect::DetectError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod detector;
pub mod error;
pub mod experiment;

pub use config::DetectorConfig;
pub use detector::{Detection, Detector};
pub use error::{DetectError, Result};
pub use experiment::{distinguish, run_trials, TrialSummary};

pub use qfeistel_api::{Classification, DecisionReason};
