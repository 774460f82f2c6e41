use crate::core::error::{check_range, ConfigError};

/// The user-tunable parameters of a modulated delay.
///
/// Values are checked on construction, so a `ModulationParams` is always finite with
/// `rate_hz > 0`, `depth_samples >= 0` and `mix` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationParams {
    rate_hz: f32,
    depth_samples: f32,
    mix: f32,
}

impl ModulationParams {
    /// Validates a parameter set.
    ///
    /// # Arguments
    /// * `rate_hz` - LFO rate in Hz.
    /// * `depth_samples` - Peak delay excursion in samples.
    /// * `mix` - Wet share of the output (0.0 = dry, 1.0 = wet).
    pub fn new(rate_hz: f32, depth_samples: f32, mix: f32) -> Result<Self, ConfigError> {
        Ok(ModulationParams {
            rate_hz: Self::check_rate(rate_hz)?,
            depth_samples: Self::check_depth(depth_samples)?,
            mix: Self::check_mix(mix)?,
        })
    }

    pub(crate) const fn preset(rate_hz: f32, depth_samples: f32, mix: f32) -> Self {
        ModulationParams {
            rate_hz,
            depth_samples,
            mix,
        }
    }

    /// Checks an LFO rate: finite and strictly positive.
    pub fn check_rate(rate_hz: f32) -> Result<f32, ConfigError> {
        let rate_hz = check_range("rate_hz", rate_hz, 0.0, f32::MAX)?;
        if rate_hz == 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "rate_hz",
                value: rate_hz,
                min: f32::MIN_POSITIVE,
                max: f32::MAX,
            });
        }
        Ok(rate_hz)
    }

    /// Checks a depth: finite and non-negative.
    pub fn check_depth(depth_samples: f32) -> Result<f32, ConfigError> {
        check_range("depth_samples", depth_samples, 0.0, f32::MAX)
    }

    /// Checks a mix: finite and within `[0, 1]`.
    pub fn check_mix(mix: f32) -> Result<f32, ConfigError> {
        check_range("mix", mix, 0.0, 1.0)
    }

    pub fn rate_hz(&self) -> f32 {
        self.rate_hz
    }

    pub fn depth_samples(&self) -> f32 {
        self.depth_samples
    }

    pub fn mix(&self) -> f32 {
        self.mix
    }

    pub(crate) fn set_rate_hz(&mut self, rate_hz: f32) -> Result<(), ConfigError> {
        self.rate_hz = Self::check_rate(rate_hz)?;
        Ok(())
    }

    pub(crate) fn set_depth_samples(&mut self, depth_samples: f32) -> Result<(), ConfigError> {
        self.depth_samples = Self::check_depth(depth_samples)?;
        Ok(())
    }

    pub(crate) fn set_mix(&mut self, mix: f32) -> Result<(), ConfigError> {
        self.mix = Self::check_mix(mix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid() {
        let p = ModulationParams::new(0.8, 96.0, 0.5).unwrap();
        assert_eq!(p.rate_hz(), 0.8);
        assert_eq!(p.depth_samples(), 96.0);
        assert_eq!(p.mix(), 0.5);
        assert!(ModulationParams::new(5.0, 0.0, 0.0).is_ok());
        assert!(ModulationParams::new(5.0, 10.0, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            ModulationParams::new(f32::NAN, 10.0, 0.5),
            Err(ConfigError::NonFinite { name: "rate_hz", .. })
        ));
        assert!(matches!(
            ModulationParams::new(0.0, 10.0, 0.5),
            Err(ConfigError::OutOfRange { name: "rate_hz", .. })
        ));
        assert!(matches!(
            ModulationParams::new(-2.0, 10.0, 0.5),
            Err(ConfigError::OutOfRange { name: "rate_hz", .. })
        ));
        assert!(matches!(
            ModulationParams::new(1.0, f32::INFINITY, 0.5),
            Err(ConfigError::NonFinite { name: "depth_samples", .. })
        ));
        assert!(matches!(
            ModulationParams::new(1.0, -1.0, 0.5),
            Err(ConfigError::OutOfRange { name: "depth_samples", .. })
        ));
        assert!(matches!(
            ModulationParams::new(1.0, 10.0, 1.01),
            Err(ConfigError::OutOfRange { name: "mix", .. })
        ));
    }

    #[test]
    fn test_failed_set_keeps_value() {
        let mut p = ModulationParams::new(1.0, 10.0, 0.5).unwrap();
        assert!(p.set_mix(f32::NAN).is_err());
        assert_eq!(p.mix(), 0.5);
        p.set_mix(0.25).unwrap();
        assert_eq!(p.mix(), 0.25);
    }
}
