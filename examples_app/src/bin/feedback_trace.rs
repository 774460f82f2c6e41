use anyhow::Result;
use ringfx_core::{DelayLength, FeedbackDelayLine};

fn main() -> Result<()> {
    let mut line: FeedbackDelayLine = FeedbackDelayLine::new();
    let delay: DelayLength = DelayLength::new(1)?;
    let input = [0.5, 0.25, 0.15, 0.0, -0.5, -0.25, -0.15, 0.0];

    println!("delay = {} sample, wetness = 1, feedback = 0.2", delay.samples());
    for (n, &x) in input.iter().enumerate() {
        let y = line.process(x, delay, 1.0, 0.2);
        println!("{:>2}  in {:>6}  out {:>12} (0x{:08x})", n, x, y, y.to_bits());
    }

    Ok(())
}
