//! Preset Playback
//!
//! This demo runs every preset through the validator and plays each trace
//! back one character at a time, the way an animated display would.
//!
//! Key concepts:
//! - The engine computes the whole trace up front
//! - A Player paces the precomputed steps on a timer
//! - Recommendations are only produced for accepted names
//!
//! Run with: cargo run --example playback
//! Set RUST_LOG=identifier_dfa=debug to see engine and analyzer events.

use identifier_dfa::config::{DemoConfig, PlaybackConfig};
use identifier_dfa::playback::{PlaybackEvent, Player};
use identifier_dfa::report::ValidationReport;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Preset Playback Demo ===\n");

    let config = DemoConfig {
        playback: PlaybackConfig::with_interval_ms(100),
        ..DemoConfig::default()
    };
    let mut player = Player::new(config.playback);

    for preset in &config.presets {
        println!("Input: {:?} ({})", preset.name, preset.description);
        let outcome = preset.run();

        let mut stream = player.play(outcome.result.clone());
        while let Some(event) = stream.next().await {
            match event {
                PlaybackEvent::Step { index, step } => println!(
                    "  [{index}] '{}' {} -> {} ({})",
                    step.character, step.from, step.to, step.category
                ),
                PlaybackEvent::Finished { accepted, .. } => {
                    println!("  verdict: {}", if accepted { "valid" } else { "invalid" })
                }
            }
        }

        if let Some(rec) = &outcome.recommendation {
            println!("  score: {}/5 ({})", rec.score, rec.label.summary());
            for positive in &rec.positives {
                println!("    + {positive}");
            }
            for suggestion in &rec.suggestions {
                println!("    - {suggestion}");
            }
        }

        let report = ValidationReport::new(&preset.name, Some(&preset.description), outcome);
        match report.to_json() {
            Ok(json) => println!("  report: {} bytes of JSON", json.len()),
            Err(e) => println!("  report failed: {e}"),
        }
        println!();
    }

    println!("=== Demo Complete ===");
}
