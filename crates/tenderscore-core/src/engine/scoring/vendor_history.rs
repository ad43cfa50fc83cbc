//! Vendor track-record scoring.
//!
//! There is no store of past vendor performance yet. [`SimulatedVendorHistory`]
//! stands in for one: it derives a stable pseudo-score from the vendor's name
//! alone, so the same vendor always scores the same and comparisons are
//! reproducible. Swap in a real [`VendorHistory`] once order outcomes are
//! recorded.

use rand::{Rng, SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};

/// Lowest score a vendor can receive.
pub const MIN_VENDOR_SCORE: f64 = 40.0;
/// Highest score a vendor can receive.
pub const MAX_VENDOR_SCORE: f64 = 100.0;

const BASE_FLOOR: f64 = 60.0;
const BASE_STEP: f64 = 0.35;
const NOISE_STD_DEV: f64 = 5.0;

/// Source of vendor reputation scores.
pub trait VendorHistory: Send + Sync {
    /// Score in `[MIN_VENDOR_SCORE, MAX_VENDOR_SCORE]` for the named vendor.
    fn score(&self, vendor_name: &str) -> f64;
}

/// Deterministic stand-in for a vendor reputation lookup.
///
/// The name is hashed with SHA-256; the hash picks a base score in the
/// 60-95 band and seeds a PRNG that adds zero-mean Gaussian noise
/// (σ = 5). The result is clamped to `[40, 100]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedVendorHistory;

impl VendorHistory for SimulatedVendorHistory {
    fn score(&self, vendor_name: &str) -> f64 {
        let hash = name_hash(vendor_name);
        let base = BASE_FLOOR + (hash % 100) as f64 * BASE_STEP;

        let mut rng = StdRng::seed_from_u64(hash % 1000);
        let noise = standard_normal(&mut rng) * NOISE_STD_DEV;

        (base + noise).clamp(MIN_VENDOR_SCORE, MAX_VENDOR_SCORE)
    }
}

/// First eight bytes of the SHA-256 digest of `name`, big-endian.
fn name_hash(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// One standard normal sample (Box-Muller).
fn standard_normal(rng: &mut impl Rng) -> f64 {
    // 1 - U keeps the logarithm's argument in (0, 1]
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_score() {
        let history = SimulatedVendorHistory;
        for name in ["Acme Supplies", "Globex", "", "Ünïcödé GmbH"] {
            assert_eq!(history.score(name), history.score(name));
            assert_eq!(history.score(name), SimulatedVendorHistory.score(name));
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        let history = SimulatedVendorHistory;
        for i in 0..2_000 {
            let score = history.score(&format!("vendor-{i}"));
            assert!(
                (MIN_VENDOR_SCORE..=MAX_VENDOR_SCORE).contains(&score),
                "vendor-{i} scored {score}"
            );
        }
    }

    #[test]
    fn different_names_spread_across_the_band() {
        let history = SimulatedVendorHistory;
        let scores: Vec<f64> = (0..200).map(|i| history.score(&format!("v{i}"))).collect();
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 10.0, "scores collapsed into [{min}, {max}]");
    }

    #[test]
    fn name_hash_is_stable() {
        // SHA-256("abc") starts with ba7816bf8f01cfea
        assert_eq!(name_hash("abc"), 0xba78_16bf_8f01_cfea);
    }
}
