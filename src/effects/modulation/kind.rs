use super::params::ModulationParams;
use core::fmt;

/// The modulated-delay effects. They share the processing path and differ only in
/// where the LFO centres the delay and in their presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulationKind {
    /// Pitch wobble. Fully wet, centre delay just above the depth.
    Vibrato,
    /// Thickening. ~20 ms centre delay blended with the dry signal.
    Chorus,
    /// Comb sweep. ~1 ms centre delay blended with the dry signal.
    Flanger,
}

impl ModulationKind {
    pub const ALL: [ModulationKind; 3] = [
        ModulationKind::Vibrato,
        ModulationKind::Chorus,
        ModulationKind::Flanger,
    ];

    /// Centre delay in samples around which the LFO swings.
    ///
    /// The vibrato centre tracks the depth so the lowest excursion sits at one sample.
    #[inline]
    pub fn base_delay_samples(&self, depth_samples: f32, sample_rate: f32) -> f32 {
        match self {
            ModulationKind::Vibrato => depth_samples + 1.0,
            ModulationKind::Chorus => 0.020 * sample_rate,
            ModulationKind::Flanger => 0.001 * sample_rate,
        }
    }

    /// The preset `{rate, depth, mix}` an engine starts with.
    pub fn default_params(&self) -> ModulationParams {
        match self {
            ModulationKind::Vibrato => ModulationParams::preset(5.0, 10.0, 1.0),
            // ~2 ms depth at 48 kHz
            ModulationKind::Chorus => ModulationParams::preset(0.8, 96.0, 0.5),
            // ~1 ms depth at 48 kHz
            ModulationKind::Flanger => ModulationParams::preset(0.2, 48.0, 0.5),
        }
    }

    /// Advisory parameter ranges, for display before interactive entry.
    pub fn typical_ranges(&self) -> TypicalRanges {
        match self {
            ModulationKind::Vibrato => TypicalRanges {
                kind: *self,
                mix: "1.0 (100% wet)",
                base_delay: "depth + 1 samples (internal)",
                depth: "2 - 20 samples",
                rate: "4 - 7 Hz",
            },
            ModulationKind::Chorus => TypicalRanges {
                kind: *self,
                mix: "0.3 - 0.6",
                base_delay: "15 - 30 ms (internal)",
                depth: "1 - 5 ms",
                rate: "0.2 - 1.5 Hz",
            },
            ModulationKind::Flanger => TypicalRanges {
                kind: *self,
                mix: "~0.5",
                base_delay: "0.5 - 3 ms (internal)",
                depth: "0.5 - 3 ms",
                rate: "0.05 - 2 Hz",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModulationKind::Vibrato => "Vibrato",
            ModulationKind::Chorus => "Chorus",
            ModulationKind::Flanger => "Flanger",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ModulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The typical parameter table of one effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypicalRanges {
    pub kind: ModulationKind,
    pub mix: &'static str,
    pub base_delay: &'static str,
    pub depth: &'static str,
    pub rate: &'static str,
}

impl fmt::Display for TypicalRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.kind.name();
        writeln!(f, "{} - typical parameter ranges", title)?;
        writeln!(f, "{:-<1$}", "", title.len() + 27)?;
        writeln!(f, "Mix (wetness):      {}", self.mix)?;
        writeln!(f, "Base delay:         {}", self.base_delay)?;
        writeln!(f, "Depth:              {}", self.depth)?;
        writeln!(f, "LFO rate:           {}", self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_base_delay() {
        assert_eq!(ModulationKind::Vibrato.base_delay_samples(10.0, 48000.0), 11.0);
        assert!((ModulationKind::Chorus.base_delay_samples(96.0, 48000.0) - 960.0).abs() < 1e-3);
        assert!((ModulationKind::Flanger.base_delay_samples(48.0, 48000.0) - 48.0).abs() < 1e-3);
    }

    #[test]
    fn test_presets() {
        let v = ModulationKind::Vibrato.default_params();
        assert_eq!((v.rate_hz(), v.depth_samples(), v.mix()), (5.0, 10.0, 1.0));
        let c = ModulationKind::Chorus.default_params();
        assert_eq!((c.rate_hz(), c.depth_samples(), c.mix()), (0.8, 96.0, 0.5));
        let f = ModulationKind::Flanger.default_params();
        assert_eq!((f.rate_hz(), f.depth_samples(), f.mix()), (0.2, 48.0, 0.5));

        // Presets satisfy the same checks as user input.
        for kind in ModulationKind::ALL {
            let p = kind.default_params();
            assert_eq!(
                ModulationParams::new(p.rate_hz(), p.depth_samples(), p.mix()),
                Ok(p)
            );
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ModulationKind::from_name("chorus"), Some(ModulationKind::Chorus));
        assert_eq!(ModulationKind::from_name("FLANGER"), Some(ModulationKind::Flanger));
        assert_eq!(ModulationKind::from_name("phaser"), None);
    }

    #[test]
    fn test_typical_ranges_display() {
        let text = ModulationKind::Chorus.typical_ranges().to_string();
        assert!(text.starts_with("Chorus - typical parameter ranges\n"));
        assert!(text.contains("LFO rate:           0.2 - 1.5 Hz"));
    }
}
