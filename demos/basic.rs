//! Basic tweetnorm example: runs the default tweet pipeline and a configured
//! one over a few sample posts.
//!
//! Usage:
//!   cargo run --example basic
//!   cargo run --example basic -- --text "OMG @bob luv this!!! 😂 https://t.co/x"
//!   cargo run --example basic -- --config pipeline.json

use tweetnorm::{PreprocessorConfig, TextPreprocessor};

const SAMPLES: &[&str] = &[
    "RT @Stephan007: @Devoxx If interested, the Devoxx CFP opens en…",
    "<p>I can't believe it's sooo sooo good!!! 😂😂 #blessed</p>",
    "luv u 2mw :) mail me at jane.doe@example.org or see www.example.com/about",
    "   ",
];

fn main() -> anyhow::Result<()> {
    // ── Parse simple CLI arguments ───────────────────────────────────────────
    let mut args = std::env::args().skip(1);
    let mut texts: Vec<String> = Vec::new();
    let mut config_path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text"   => { if let Some(v) = args.next() { texts.push(v); } }
            "--config" => { config_path = args.next(); }
            "--help"   => {
                println!("Usage: basic [--text TEXT]... [--config FILE]");
                return Ok(());
            }
            _ => {}
        }
    }
    if texts.is_empty() {
        texts = SAMPLES.iter().map(|s| s.to_string()).collect();
    }

    // ── Build pipeline ───────────────────────────────────────────────────────
    let pipeline = match &config_path {
        Some(path) => TextPreprocessor::with_config(PreprocessorConfig::from_file(path)?)?,
        None => TextPreprocessor::new(),
    };
    println!("Stages : {}", pipeline.stage_names().join(" → "));
    println!();

    // ── Normalize ────────────────────────────────────────────────────────────
    for text in &texts {
        println!("In     : {:?}", text);
        match pipeline.process_traced(Some(text)) {
            Some(out) => {
                println!("Out    : {:?}", out.text);
                let hits: Vec<String> = out
                    .counts
                    .iter()
                    .filter(|(_, n)| *n > 0)
                    .map(|(stage, n)| format!("{}={}", stage, n))
                    .collect();
                if !hits.is_empty() {
                    println!("Counts : {}", hits.join(", "));
                }
            }
            None => println!("Out    : <rejected>"),
        }
        println!();
    }

    Ok(())
}
