use anyhow::Result;
use clap::Parser;
use tracing::info;

use uccharan::{compare, normalize_basic, segment_with_defaults, Language, Verdict};

#[derive(Parser, Debug)]
#[command(name = "uccharan")]
#[command(about = "Compare a reference text against a recognizer transcript, token by token")]
#[command(version)]
struct Args {
    /// The text the learner was asked to pronounce
    reference: String,

    /// The recognizer's hypothesis transcript
    hypothesis: String,

    /// Language tag: "en" or "np"
    #[arg(long, default_value = "en")]
    language: String,

    /// Treat the hypothesis as one unspaced Devanagari run and segment it
    /// with the built-in dictionary first (only meaningful with --language np)
    #[arg(long)]
    segment: bool,

    /// Emit the verdict list as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting uccharan");
    info!(?args, "Parsed CLI arguments");

    // Validate the language tag early to fail fast with a clear error.
    let language = match Language::from_tag(&args.language) {
        Ok(language) => language,
        Err(e) => anyhow::bail!("{e}"),
    };

    if args.segment && language != Language::Nepali {
        anyhow::bail!("--segment is only meaningful with --language np");
    }

    let hypothesis = if args.segment {
        // Raw recognizer runs can carry stutter repeats and glued punctuation;
        // clean those up before dictionary segmentation.
        let cleaned = normalize_basic(&args.hypothesis);
        let words = segment_with_defaults(&cleaned);
        info!(segments = words.len(), "Segmented unspaced hypothesis run");
        words.join(" ")
    } else {
        args.hypothesis.clone()
    };

    let results = compare(&args.reference, &hypothesis, language);
    info!(verdicts = results.len(), "Comparison complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let correct = results
        .iter()
        .filter(|r| r.verdict == Verdict::Correct)
        .count();

    for result in &results {
        let mark = match result.verdict {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
        };
        println!("{}\t{}", result.token, mark);
    }
    println!(
        "uccharan v{} - {} of {} reference tokens correct",
        env!("CARGO_PKG_VERSION"),
        correct,
        results.len()
    );

    Ok(())
}
