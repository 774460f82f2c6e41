use anyhow::{bail, Context, Result};
use log::info;
use ringfx_core::core::channels::ChannelBank;
use ringfx_core::core::dsp_chain::DspChain;
use ringfx_core::effects::time::feedback_delay::DELAY_CAPACITY;
use ringfx_core::{DelayLength, FeedbackDelay, ModulationEngine, ModulationKind};
use ringfx_examples::{prompt, wav_io};
use std::io;

const DELAY_MS: f32 = 251.0;
const WETNESS: f32 = 1.0;
const FEEDBACK: f32 = 0.5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_defaults = args.iter().any(|a| a == "--defaults");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let (input_path, output_path) = match positional.as_slice() {
        [input, output, ..] => (input.as_str(), output.as_str()),
        _ => bail!("usage: process_wav <input.wav> <output.wav> [vibrato|chorus|flanger] [--defaults]"),
    };
    let kind = match positional.get(2) {
        Some(name) => ModulationKind::from_name(name)
            .with_context(|| format!("unknown effect '{}'", name))?,
        None => ModulationKind::Vibrato,
    };

    let mut audio = wav_io::load(input_path)?;
    let sample_rate = audio.sample_rate() as f32;
    println!(
        "Loaded {} | fs: {} | Channels: {} | Samples/ch: {}",
        input_path,
        audio.sample_rate(),
        audio.channels.len(),
        audio.frames()
    );

    let delay = DelayLength::<DELAY_CAPACITY>::from_ms(DELAY_MS, sample_rate).with_context(|| {
        format!(
            "{} ms does not fit; increase DELAY_CAPACITY (power of two) or reduce the delay",
            DELAY_MS
        )
    })?;

    let params = if use_defaults {
        kind.default_params()
    } else {
        prompt::configure(kind, &mut io::stdin().lock(), &mut io::stdout())?
    };
    info!(
        "{}: rate {} Hz, depth {} samples, mix {}",
        kind,
        params.rate_hz(),
        params.depth_samples(),
        params.mix()
    );

    let mut bank = ChannelBank::try_new(audio.channels.len(), |_| {
        let feedback_delay: FeedbackDelay = FeedbackDelay::new(delay.samples(), WETNESS, FEEDBACK)?;
        let mut modulation: ModulationEngine = ModulationEngine::with_params(kind, params);
        modulation.set_range_logging(true);
        Ok(DspChain::new(feedback_delay, sample_rate).and(modulation))
    })?;

    if let Some(chain) = bank.channel_mut(0) {
        println!("Signal Chain (per channel):\n{}", chain.get_graph());
    }

    bank.process_channels(&mut audio.channels, 0)?;

    wav_io::save(output_path, &audio)?;
    println!("Wrote {}", output_path);

    Ok(())
}
