use crate::config::ScalingPolicy;
use crate::constants::{FIXED_AMPLITUDE_HIGH, FIXED_AMPLITUDE_LOW, VELOCITY_MAX, VELOCITY_MIN};
use crate::error::{ConversionError, Result};
use crate::preprocessing::partials::Partial;

use super::helpers::{helpers::linear_scale, ported::numpy::min_max};

/// The amplitude range mapped onto velocities 0..=127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeRange {
    pub low: f64,
    pub high: f64,
}

impl AmplitudeRange {
    pub const FIXED: AmplitudeRange = AmplitudeRange {
        low: FIXED_AMPLITUDE_LOW,
        high: FIXED_AMPLITUDE_HIGH,
    };

    /// First pass of adaptive scaling: the min and max of the per-partial mean amplitude.
    ///
    /// Returns `None` when there are no partials.
    pub fn observe(partials: &[Partial]) -> Option<Self> {
        min_max(partials.iter().map(Partial::mean_amplitude)).map(|(low, high)| Self { low, high })
    }
}

/// Maps mean amplitudes to MIDI velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityScaler {
    range: AmplitudeRange,
}

impl VelocityScaler {
    pub fn new(range: AmplitudeRange) -> Result<Self> {
        let AmplitudeRange { low, high } = range;
        if !(high - low).is_normal() {
            return Err(ConversionError::DegenerateAmplitudeRange { low, high });
        }
        Ok(Self { range })
    }

    /// Builds the scaler for a policy, observing the partials when the policy needs it.
    ///
    /// Returns `None` for adaptive scaling over no partials, where there is nothing to scale.
    pub fn for_policy(policy: ScalingPolicy, partials: &[Partial]) -> Result<Option<Self>> {
        let range = match policy {
            ScalingPolicy::Fixed => Some(AmplitudeRange::FIXED),
            ScalingPolicy::Adaptive => AmplitudeRange::observe(partials),
        };
        range.map(Self::new).transpose()
    }

    pub fn range(&self) -> AmplitudeRange {
        self.range
    }

    /// Scales an amplitude to a velocity, rounding half to even and clamping to 0..=127.
    pub fn velocity(&self, amplitude: f64) -> u8 {
        let scaled = linear_scale(
            amplitude,
            self.range.low,
            self.range.high,
            VELOCITY_MIN as f64,
            VELOCITY_MAX as f64,
        )
        .round_ties_even();

        if !(VELOCITY_MIN as f64..=VELOCITY_MAX as f64).contains(&scaled) {
            tracing::debug!(amplitude, scaled, "velocity outside MIDI range, clamping");
        }
        // NaN saturates to 0 in the cast.
        scaled.clamp(VELOCITY_MIN as f64, VELOCITY_MAX as f64) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::partials::parse_partial;

    fn partial_with_amplitude(amplitude: f64) -> Partial {
        parse_partial(&format!("0.0 440.0 {amplitude} 1.0 440.0 {amplitude}")).unwrap()
    }

    #[test]
    fn test_fixed_range() {
        let scaler = VelocityScaler::new(AmplitudeRange::FIXED).unwrap();
        assert_eq!(scaler.velocity(0.0), 0);
        assert_eq!(scaler.velocity(1.0), 127);
        assert_eq!(scaler.velocity(0.5), 64);
        assert_eq!(scaler.velocity(0.11873), 15);
    }

    #[test]
    fn test_ties_round_half_to_even() {
        let scaler = VelocityScaler::new(AmplitudeRange { low: 0.0, high: 127.0 }).unwrap();
        assert_eq!(scaler.velocity(62.5), 62);
        assert_eq!(scaler.velocity(63.5), 64);
        assert_eq!(scaler.velocity(0.5), 0);
        assert_eq!(scaler.velocity(1.5), 2);
    }

    #[test]
    fn test_fixed_range_clamps_unnormalised_amplitudes() {
        let scaler = VelocityScaler::new(AmplitudeRange::FIXED).unwrap();
        assert_eq!(scaler.velocity(1.7), 127);
        assert_eq!(scaler.velocity(-0.2), 0);
    }

    #[test]
    fn test_adaptive_range_spans_full_velocity_range() {
        let partials = vec![
            partial_with_amplitude(0.02),
            partial_with_amplitude(0.01),
            partial_with_amplitude(0.03),
        ];
        let scaler = VelocityScaler::for_policy(ScalingPolicy::Adaptive, &partials)
            .unwrap()
            .unwrap();
        assert_eq!(scaler.range(), AmplitudeRange { low: 0.01, high: 0.03 });
        assert_eq!(scaler.velocity(0.01), 0);
        assert_eq!(scaler.velocity(0.03), 127);
    }

    #[test]
    fn test_adaptive_uses_per_partial_means() {
        let partials = vec![
            parse_partial("0.0 440.0 0.0 1.0 440.0 0.4").unwrap(),
            parse_partial("0.0 440.0 0.6 1.0 440.0 1.0").unwrap(),
        ];
        let range = AmplitudeRange::observe(&partials).unwrap();
        assert!((range.low - 0.2).abs() < 1e-12);
        assert!((range.high - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_adaptive_with_single_partial_is_degenerate() {
        let partials = vec![partial_with_amplitude(0.5)];
        let err = VelocityScaler::for_policy(ScalingPolicy::Adaptive, &partials).unwrap_err();
        assert!(matches!(err, ConversionError::DegenerateAmplitudeRange { .. }));
    }

    #[test]
    fn test_adaptive_with_equal_amplitudes_is_degenerate() {
        let partials = vec![partial_with_amplitude(0.25), partial_with_amplitude(0.25)];
        assert!(matches!(
            VelocityScaler::for_policy(ScalingPolicy::Adaptive, &partials),
            Err(ConversionError::DegenerateAmplitudeRange { .. })
        ));
    }

    #[test]
    fn test_adaptive_without_partials_has_no_scaler() {
        assert!(VelocityScaler::for_policy(ScalingPolicy::Adaptive, &[]).unwrap().is_none());
        assert!(VelocityScaler::for_policy(ScalingPolicy::Fixed, &[]).unwrap().is_some());
    }
}
