use crossfade::{CrossfadePlan, EnvelopeOptions, FrameIndex};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let plan = CrossfadePlan::build(16, 4, EnvelopeOptions::default())?;
    let covered = plan.covered_frames();

    for f in 0..plan.number_of_frames {
        let row: Vec<String> = plan
            .envelopes
            .iter()
            .map(|e| format!("{:.3}", e.get(FrameIndex(f)).unwrap_or(0.0)))
            .collect();
        let marker = if covered.contains(FrameIndex(f)) { "" } else { "  (tail)" };
        println!("frame {f:>2}: {}{marker}", row.join("  "));
    }

    Ok(())
}
