use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Planar audio: one sample vector per channel, all the same length.
pub struct PlanarAudio {
    pub channels: Vec<Vec<f32>>,
    pub spec: WavSpec,
}

impl PlanarAudio {
    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }
}

/// Loads a WAV file and splits it into channels.
///
/// Integer formats are scaled into `[-1, 1)`.
pub fn load(path: impl AsRef<Path>) -> Result<PlanarAudio> {
    let path = path.as_ref();
    let mut reader =
        WavReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    if spec.channels == 0 {
        bail!("{} has no channels", path.display());
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };

    Ok(PlanarAudio {
        channels: deinterleave(&interleaved, spec.channels as usize),
        spec,
    })
}

/// Writes planar audio back to a WAV file with the given spec.
pub fn save(path: impl AsRef<Path>, audio: &PlanarAudio) -> Result<()> {
    let path = path.as_ref();
    let spec = audio.spec;
    if audio.channels.len() != spec.channels as usize {
        bail!(
            "spec says {} channels but {} were supplied",
            spec.channels,
            audio.channels.len()
        );
    }

    let mut writer =
        WavWriter::create(path, spec).with_context(|| format!("failed to create {}", path.display()))?;
    let interleaved = interleave(&audio.channels);

    match spec.sample_format {
        SampleFormat::Float => {
            for s in interleaved {
                writer.write_sample(s)?;
            }
        }
        SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            let max = full_scale - 1.0;
            for s in interleaved {
                let v = (s * full_scale).round().clamp(-full_scale, max);
                writer.write_sample(v as i32)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Splits frame-interleaved samples into one vector per channel.
pub fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    let frames = samples.len() / channels;
    let mut out = vec![Vec::with_capacity(frames); channels];
    for frame in samples.chunks_exact(channels) {
        for (ch, &s) in frame.iter().enumerate() {
            out[ch].push(s);
        }
    }
    out
}

/// Joins per-channel vectors into frame-interleaved samples.
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = Vec::with_capacity(frames * channels.len());
    for i in 0..frames {
        for ch in channels {
            out.push(ch[i]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deinterleave() {
        let samples = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        let channels = deinterleave(&samples, 2);
        assert_eq!(channels, vec![vec![0.1, 0.2, 0.3], vec![-0.1, -0.2, -0.3]]);
        assert_eq!(interleave(&channels), samples.to_vec());
    }

    #[test]
    fn test_save_and_load_int16() {
        let path = std::env::temp_dir().join(format!("ringfx-wav-io-{}.wav", std::process::id()));
        let audio = PlanarAudio {
            channels: vec![vec![0.0, 0.5, -0.5, 0.25], vec![0.125, -1.0, 0.75, 0.0]],
            spec: WavSpec {
                channels: 2,
                sample_rate: 48000,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            },
        };

        save(&path, &audio).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.sample_rate(), 48000);
        assert_eq!(loaded.frames(), 4);
        for (a, b) in loaded.channels.iter().flatten().zip(audio.channels.iter().flatten()) {
            assert!((a - b).abs() < 1.0 / 32768.0, "{} vs {}", a, b);
        }
    }
}
