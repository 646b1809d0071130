//! Naive Bayes sentiment scoring over per-word class frequency counts.
//!
//! The classifier owns a dictionary mapping each seed word to its frequency
//! count per class, a set of ignored tokens, a list of negation markers, and
//! a prior probability per class. Scoring a text multiplies `count + 1` for
//! every valid token (add-one smoothing, so unseen words never zero out the
//! product), weights the result by the class prior, and normalizes across
//! classes.
//!
//! # Negation fusion
//!
//! Before tokenizing, every occurrence of a negation marker followed by a
//! space is fused onto the next word: `"not good"` becomes the single token
//! `"notgood"`, which the word lists can score directly. The match is a
//! plain substring match, not word-boundary aware; a marker embedded inside
//! another word also triggers fusion.
//!
//! All reference data is built once during `initialize` and read-only
//! afterwards, so a classifier can be shared freely across threads.

use crate::lexicon::WordSource;
use ahash::{AHashMap, AHashSet};
use std::error::Error;

/// The sentiment classifier.
pub struct Classifier {
    /// Class labels in declaration order; ties resolve to the first label.
    classes: Vec<String>,
    /// Prior probability per class, parallel to `classes`. Sums to 1.
    priors: Vec<f64>,
    /// Seed word -> class label -> frequency count (always >= 1 when stored).
    dictionary: AHashMap<String, AHashMap<String, u64>>,
    /// Tokens excluded from scoring.
    ignore: AHashSet<String>,
    /// Negation markers, in list order.
    negation: Vec<String>,
    min_token_length: usize,
    max_token_length: usize,
}

impl Classifier {
    /// Create an empty classifier from the runtime configuration.
    ///
    /// Validates the class list and priors: there must be at least one
    /// class, and configured priors must match the class count, be strictly
    /// positive, and sum to 1. Call `initialize` before classifying.
    ///
    /// # Errors
    /// Returns an error for an empty class list or an invalid prior table.
    pub fn new_with_config(config: &crate::config::Config) -> Result<Self, Box<dyn Error>> {
        if config.classes.is_empty() {
            return Err("at least one class label is required".into());
        }

        let priors = match &config.priors {
            Some(priors) => {
                validate_priors(priors, config.classes.len())?;
                priors.clone()
            }
            None => default_priors(config.classes.len()),
        };

        Ok(Self {
            classes: config.classes.clone(),
            priors,
            dictionary: AHashMap::new(),
            ignore: AHashSet::new(),
            negation: Vec::new(),
            min_token_length: config.min_token_length,
            max_token_length: config.max_token_length,
        })
    }

    /// Build the dictionary and the ignore/negation lists from a word source.
    ///
    /// Loads one word list per class label plus the special `ignore` and
    /// `negation` lists. Seeding is idempotent: a word listed twice for the
    /// same class keeps its count of 1.
    ///
    /// # Errors
    /// Returns an error if any required list cannot be loaded; the
    /// classifier must not be used after a failed initialization.
    pub fn initialize(&mut self, source: &dyn WordSource) -> Result<(), Box<dyn Error>> {
        let mut dictionary: AHashMap<String, AHashMap<String, u64>> = AHashMap::new();

        for class in &self.classes {
            let words = source.load_words(class)?;

            for word in words {
                let word = word.trim().to_string();
                dictionary
                    .entry(word)
                    .or_default()
                    .entry(class.clone())
                    .or_insert(1);
            }
        }

        self.dictionary = dictionary;
        self.ignore = source.load_list("ignore")?.into_iter().collect();
        self.negation = source.load_list("negation")?;

        Ok(())
    }

    /// The configured class labels, in declaration order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Normalized per-class scores for a text.
    ///
    /// Each class's raw score is divided by the sum over all classes and
    /// rounded to 3 decimal places (half away from zero). The map holds
    /// exactly one entry per configured class; due to independent rounding
    /// the values may not re-sum to exactly 1.
    pub fn scores(&self, text: &str) -> AHashMap<String, f64> {
        let tokens = self.tokenize(text);
        let raw = self.raw_scores(&tokens);
        let total: f64 = raw.iter().sum();

        self.classes
            .iter()
            .zip(&raw)
            .map(|(class, score)| (class.clone(), round3(score / total)))
            .collect()
    }

    /// The best-scoring class label for a text.
    ///
    /// Ranks the unrounded scores; when several classes share the maximum,
    /// the first one in declaration order wins. An input with no valid
    /// tokens degrades to the class with the highest prior.
    pub fn classify(&self, text: &str) -> &str {
        let tokens = self.tokenize(text);
        let raw = self.raw_scores(&tokens);

        let mut best = 0;
        for (index, score) in raw.iter().enumerate() {
            if *score > raw[best] {
                best = index;
            }
        }

        &self.classes[best]
    }

    /// Raw multiplicative score per class, parallel to `classes`.
    fn raw_scores(&self, tokens: &[String]) -> Vec<f64> {
        self.classes
            .iter()
            .zip(&self.priors)
            .map(|(class, prior)| self.tokens_score(tokens, class, *prior))
            .collect()
    }

    /// P(class) * product of (count(token, class) + 1) over valid tokens.
    fn tokens_score(&self, tokens: &[String], class: &str, prior: f64) -> f64 {
        let mut score = 1.0;

        for token in tokens {
            if !self.is_valid_token(token) {
                continue;
            }

            let count = self.dictionary_count(token, class);
            score *= (count + 1) as f64;
        }

        score * prior
    }

    /// Split a text into scoring tokens.
    ///
    /// Line breaks become spaces, negation markers are fused onto the word
    /// that follows them, the whole text is lowercased, and the result is
    /// split on single spaces. Empty tokens from repeated spaces survive
    /// here and are dropped by the length check during scoring.
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.replace("\r\n", " ");
        let text = self.fuse_negations(&text);

        text.to_lowercase()
            .split(' ')
            .map(str::to_string)
            .collect()
    }

    /// Remove the space after each negation marker, gluing it to the next
    /// word. Plain substring replacement; runs before lowercasing.
    fn fuse_negations(&self, text: &str) -> String {
        let mut text = text.to_string();

        for word in &self.negation {
            let marker = format!("{} ", word);
            if text.contains(&marker) {
                text = text.replace(&marker, word);
            }
        }

        text
    }

    /// A token scores iff its length is within bounds and it is not ignored.
    fn is_valid_token(&self, token: &str) -> bool {
        if token.len() < self.min_token_length {
            return false;
        }

        if token.len() > self.max_token_length {
            return false;
        }

        !self.ignore.contains(token)
    }

    /// Frequency count for a (token, class) pair; 0 when absent.
    fn dictionary_count(&self, token: &str, class: &str) -> u64 {
        self.dictionary
            .get(token)
            .and_then(|counts| counts.get(class))
            .copied()
            .unwrap_or(0)
    }
}

/// Roughly equal priors for `n` classes, summing to exactly 1: the first
/// n-1 classes get 1/n truncated to 12 decimal places and the last class
/// absorbs the remainder.
fn default_priors(n: usize) -> Vec<f64> {
    let share = (1e12 / n as f64).floor() / 1e12;
    let mut priors = vec![share; n];
    priors[n - 1] = 1.0 - share * (n - 1) as f64;
    priors
}

fn validate_priors(priors: &[f64], class_count: usize) -> Result<(), Box<dyn Error>> {
    if priors.len() != class_count {
        return Err(format!(
            "expected {} priors, got {}",
            class_count,
            priors.len()
        )
        .into());
    }

    if priors.iter().any(|p| *p <= 0.0) {
        return Err("every class prior must be strictly positive".into());
    }

    let total: f64 = priors.iter().sum();
    if (total - 1.0).abs() > 1e-6 {
        return Err(format!("class priors must sum to 1, got {}", total).into());
    }

    Ok(())
}

/// Round to 3 decimal places, halves away from zero.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
