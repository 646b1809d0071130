//! Sentiment - a Naive Bayes sentiment classifier for short text.
//!
//! # Overview
//!
//! This tool assigns one of a fixed set of sentiment classes (by default
//! positive, negative, neutral) to a piece of text by:
//! - Fusing negation markers onto the following word ("not good" -> "notgood")
//! - Splitting the lowercased text into tokens
//! - Multiplying per-class word frequency counts with add-one smoothing
//! - Normalizing the per-class products into a score distribution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Input text     │ ← CLI argument or stdin (main.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Classifier     │ ← Tokenizes and scores per class (classifier.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Word lists     │ ← Seeds the dictionaries (lexicon.rs)
//! └─────────────────┘
//! ```
//!
//! # Word lists
//!
//! The classifier is seeded from one word list per class plus an `ignore`
//! list (stopwords) and a `negation` list (markers). Default lists are
//! embedded in the binary; `--lexicon DIR` reads `<name>.txt` files from a
//! directory instead. Any missing list aborts startup - the classifier is
//! never used with a partial dictionary.

use clap::Parser;
use std::error::Error;
use std::io::Read;

mod classifier;
mod config;
mod lexicon;

use classifier::Classifier;
use config::Config;
use lexicon::{DirLexicon, EmbeddedLexicon, WordSource};

#[derive(Parser, Debug)]
#[command(name = "sentiment")]
#[command(about = "Naive Bayes sentiment classifier for short text")]
#[command(version)]
struct Args {
    /// Text to classify; reads stdin when omitted
    text: Option<String>,

    /// Print the full normalized score distribution
    #[arg(long)]
    scores: bool,

    /// Directory with custom word lists (<class>.txt per class, plus
    /// ignore.txt and negation.txt)
    #[arg(short, long)]
    lexicon: Option<std::path::PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = Config::load()?;

    // Write the defaults back so a concrete config.toml exists on first run.
    if let Err(err) = config.save() {
        eprintln!("Failed to persist config defaults: {err}");
    }

    let mut classifier = Classifier::new_with_config(&config)?;

    let source: Box<dyn WordSource> = match &args.lexicon {
        Some(dir) => Box::new(DirLexicon::new(dir)),
        None => Box::new(EmbeddedLexicon),
    };

    classifier.initialize(source.as_ref())?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer.trim().to_string()
        }
    };

    if args.scores {
        let scores = classifier.scores(&text);
        for class in classifier.classes() {
            println!("{}: {:.3}", class, scores[class.as_str()]);
        }
    } else {
        println!("{}", classifier.classify(&text));
    }

    Ok(())
}
