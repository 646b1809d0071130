//! Word-list loading for the sentiment classifier.
//!
//! The classifier is seeded from named word lists: one list per sentiment
//! class plus the two special lists `ignore` and `negation`. This module
//! supplies those lists through the `WordSource` trait with two backends:
//!
//! - **Embedded lexicon**: word lists compiled into the binary at build time
//!   from `lexicon/<name>.txt`, so the tool works with no external files.
//! - **Directory lexicon**: word lists read from `<dir>/<name>.txt`, used
//!   when the user passes a custom lexicon directory.
//!
//! # Word-list format
//!
//! Word-list files use a simple text format:
//! ```text
//! # Comments start with #
//! great
//! wonderful
//! ```
//!
//! Blank lines and comments are skipped; every other line is one entry,
//! trimmed of surrounding whitespace. Entries in the `ignore` and `negation`
//! lists may contain backslash escapes (e.g. `isn\'t`) which are unescaped
//! on load so literal words with apostrophes match tokens correctly.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

// Embed the default word lists at compile time.
// If a file doesn't exist, this will fail at compile time with a clear error.
const EMBEDDED_LISTS: &[(&str, &str)] = &[
    ("positive", include_str!("../lexicon/positive.txt")),
    ("negative", include_str!("../lexicon/negative.txt")),
    ("neutral", include_str!("../lexicon/neutral.txt")),
    ("ignore", include_str!("../lexicon/ignore.txt")),
    ("negation", include_str!("../lexicon/negation.txt")),
];

/// A provider of named word lists.
///
/// A source must be able to supply a list for every configured class label
/// plus the special names `ignore` and `negation`. A missing list is an
/// error; the classifier treats it as fatal and refuses to start with a
/// partial dictionary.
pub trait WordSource {
    /// Load the raw entries of the word list with the given name.
    fn load_words(&self, name: &str) -> Result<Vec<String>, Box<dyn Error>>;

    /// Load a special list (`ignore` or `negation`): entries are trimmed
    /// and backslash escapes are unescaped.
    fn load_list(&self, name: &str) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self
            .load_words(name)?
            .iter()
            .map(|word| unescape(word.trim()))
            .collect())
    }
}

/// Word lists embedded in the binary at compile time.
pub struct EmbeddedLexicon;

impl WordSource for EmbeddedLexicon {
    fn load_words(&self, name: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let data = EMBEDDED_LISTS
            .iter()
            .find(|(list, _)| *list == name)
            .map(|(_, data)| *data)
            .ok_or_else(|| format!("no embedded word list named '{}'", name))?;

        Ok(parse_lines(data))
    }
}

/// Word lists read from `<dir>/<name>.txt`.
pub struct DirLexicon {
    dir: PathBuf,
}

impl DirLexicon {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn list_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", name))
    }
}

impl WordSource for DirLexicon {
    fn load_words(&self, name: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let path = self.list_path(name);
        let file = File::open(&path)
            .map_err(|err| format!("cannot open word list {}: {}", path.display(), err))?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = parse_line(&line) {
                words.push(entry);
            }
        }

        Ok(words)
    }
}

/// Parse a whole word-list file into its entries.
fn parse_lines(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_line).collect()
}

/// Parse a single word-list line. Returns `None` for blanks and comments.
fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    Some(line.to_string())
}

/// Resolve backslash escapes in a word-list entry.
///
/// `\n`, `\t` and `\r` become their control characters; any other escaped
/// character stands for itself (so `isn\'t` becomes `isn't`). A trailing
/// lone backslash is kept as-is.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_comments_and_blanks() {
        let data = "# comment\n\n  great  \nwonderful\n   # indented comment\n";
        let words = parse_lines(data);
        assert_eq!(words, vec!["great".to_string(), "wonderful".to_string()]);
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("isn\\'t"), "isn't");
        assert_eq!(unescape("a\\\\b"), "a\\b");
        assert_eq!(unescape("tab\\there"), "tab\there");
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_embedded_lists_present() {
        let source = EmbeddedLexicon;
        for name in ["positive", "negative", "neutral", "ignore", "negation"] {
            let words = source.load_words(name).unwrap();
            assert!(!words.is_empty(), "embedded list '{}' is empty", name);
        }
    }

    #[test]
    fn test_embedded_unknown_list_errors() {
        let source = EmbeddedLexicon;
        assert!(source.load_words("sarcastic").is_err());
    }

    #[test]
    fn test_negation_list_unescapes_apostrophes() {
        let source = EmbeddedLexicon;
        let negation = source.load_list("negation").unwrap();
        assert!(negation.contains(&"isn't".to_string()));
        assert!(negation.contains(&"not".to_string()));
    }

    #[test]
    fn test_dir_lexicon_missing_file_errors() {
        let source = DirLexicon::new("/nonexistent/lexicon/dir");
        assert!(source.load_words("positive").is_err());
    }
}
