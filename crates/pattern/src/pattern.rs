// standard library
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

// crate modules
use crate::error::{Error, Result};

// external crates
use log::warn;

/// Common interface for antenna gain lookups
///
/// Angles are in radians. The elevation is accepted for all patterns but the
/// current implementations are azimuth-only.
pub trait AntennaPattern {
    /// Gain at the given azimuth and elevation
    fn gain(&self, azimuth: f32, elevation: f32) -> f32;

    /// Smallest azimuth covered by the pattern
    fn angle_min(&self) -> f32;

    /// Largest azimuth covered by the pattern
    fn angle_max(&self) -> f32;
}

/// Closed-form pattern, `cos²(az)·|cos(3·az)|` inside ±π/2
///
/// ```rust
/// # use echotools_pattern::{AnalyticalPattern, AntennaPattern};
/// let pattern = AnalyticalPattern;
/// assert_eq!(pattern.gain(0.0, 0.0), 1.0);
/// assert_eq!(pattern.gain(2.0, 0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalPattern;

impl AntennaPattern for AnalyticalPattern {
    fn gain(&self, azimuth: f32, _elevation: f32) -> f32 {
        if (-FRAC_PI_2..=FRAC_PI_2).contains(&azimuth) {
            azimuth.cos().powi(2) * (3.0 * azimuth).cos().abs()
        } else {
            0.0
        }
    }

    fn angle_min(&self) -> f32 {
        -FRAC_PI_4
    }

    fn angle_max(&self) -> f32 {
        FRAC_PI_4
    }
}

/// Pattern sampled at discrete angles, as stored in pattern binaries
///
/// Samples are kept sorted by angle. Gains between samples are linearly
/// interpolated, and azimuths outside the sampled range take the gain of the
/// nearest end sample.
///
/// ```rust
/// # use echotools_pattern::{AntennaPattern, SampledPattern};
/// let pattern = SampledPattern::new(vec![(0.0, 1.0), (-1.0, 0.0), (1.0, 0.0)]).unwrap();
///
/// assert_eq!(pattern.gain(-0.5, 0.0), 0.5);
/// assert_eq!(pattern.gain(5.0, 0.0), 0.0);
/// assert_eq!(pattern.angle_min(), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPattern {
    angles: Vec<f32>,
    gains: Vec<f32>,
}

impl SampledPattern {
    /// Build a pattern from `(angle, gain)` samples in any order
    ///
    /// Samples with a non-finite angle are dropped. Fails if nothing usable
    /// remains.
    pub fn new(mut samples: Vec<(f32, f32)>) -> Result<Self> {
        let total = samples.len();
        samples.retain(|(angle, _)| angle.is_finite());
        if samples.len() < total {
            warn!(
                "Dropped {} samples with non-finite angles",
                total - samples.len()
            );
        }

        if samples.is_empty() {
            return Err(Error::EmptyPattern);
        }

        samples.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (angles, gains) = samples.into_iter().unzip();
        Ok(Self { angles, gains })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false, a pattern holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Sample angles in ascending order
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Gains matching [angles()](SampledPattern::angles)
    pub fn gains(&self) -> &[f32] {
        &self.gains
    }
}

impl AntennaPattern for SampledPattern {
    fn gain(&self, azimuth: f32, _elevation: f32) -> f32 {
        let last = self.angles.len() - 1;
        let i = self.angles.partition_point(|angle| *angle < azimuth);

        if i == 0 {
            return self.gains[0];
        }
        if i > last {
            return self.gains[last];
        }

        // angles[i - 1] < azimuth <= angles[i], so the span is never zero
        let (a0, a1) = (self.angles[i - 1], self.angles[i]);
        let (g0, g1) = (self.gains[i - 1], self.gains[i]);
        g0 + (g1 - g0) / (a1 - a0) * (azimuth - a0)
    }

    fn angle_min(&self) -> f32 {
        self.angles[0]
    }

    fn angle_max(&self) -> f32 {
        self.angles[self.angles.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytical_nulls() {
        let pattern = AnalyticalPattern;
        // |cos(3az)| vanishes at az = π/6
        assert!(pattern.gain(std::f32::consts::FRAC_PI_6, 0.0).abs() < 1e-6);
        assert_eq!(pattern.gain(-2.0, 0.0), 0.0);
        assert_eq!(pattern.angle_min(), -FRAC_PI_4);
        assert_eq!(pattern.angle_max(), FRAC_PI_4);
    }

    #[test]
    fn sampled_drops_non_finite_angles() {
        let pattern = SampledPattern::new(vec![(f32::NAN, 1.0), (0.5, 2.0)]).unwrap();
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.gain(-10.0, 0.0), 2.0);
        assert_eq!(pattern.gain(10.0, 0.0), 2.0);

        assert!(matches!(
            SampledPattern::new(vec![(f32::INFINITY, 1.0)]),
            Err(Error::EmptyPattern)
        ));
    }

    #[test]
    fn sampled_exact_hits() {
        let pattern = SampledPattern::new(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]).unwrap();
        assert_eq!(pattern.gain(0.0, 0.0), 1.0);
        assert_eq!(pattern.gain(1.0, 0.0), 3.0);
        assert_eq!(pattern.gain(2.0, 0.0), 2.0);
        assert_eq!(pattern.gain(1.5, 0.0), 2.5);
    }
}
