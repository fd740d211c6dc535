//! Slang/abbreviation normalization
//!
//! Token-wise substitution against a tab-separated dictionary file
//! (`<raw_token>\t<canonical_token>` per line). The dictionary is loaded
//! once at startup and read-only afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Normalization dictionary mapping raw tokens to canonical tokens
#[derive(Debug, Clone, Default)]
pub struct NormalizationDict {
    map: HashMap<String, String>,
}

impl NormalizationDict {
    /// Load the dictionary from a tab-separated file.
    ///
    /// Lines that do not contain exactly two tab-separated fields are
    /// skipped silently.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut map = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
            if parts.len() == 2 {
                map.insert(parts[0].to_string(), parts[1].to_string());
            }
        }

        Ok(Self { map })
    }

    /// Load the dictionary, degrading to an identity mapping when the file
    /// is missing or unreadable. The miss is logged, not fatal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(dict) => {
                info!(
                    entries = dict.len(),
                    path = %path.as_ref().display(),
                    "normalization dictionary loaded"
                );
                dict
            }
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "normalization dictionary not available, normalization will be skipped"
                );
                Self::default()
            }
        }
    }

    /// Build a dictionary from in-memory pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Substitute each whitespace-separated token by its canonical form,
    /// keeping unknown tokens unchanged. Token order is preserved and the
    /// result is rejoined with single spaces.
    pub fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                self.map
                    .get(word)
                    .map(String::as_str)
                    .unwrap_or(word)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_apply_substitutes_known_tokens() {
        let dict = NormalizationDict::from_pairs([("gk", "tidak"), ("bgt", "banget")]);
        assert_eq!(dict.apply("gk suka bgt"), "tidak suka banget");
    }

    #[test]
    fn test_apply_identity_on_unknown_tokens() {
        let dict = NormalizationDict::from_pairs([("gk", "tidak")]);
        assert_eq!(dict.apply("saya suka sekolah"), "saya suka sekolah");
    }

    #[test]
    fn test_apply_idempotent_without_chains() {
        // No multi-hop chains: no value is itself a key
        let dict = NormalizationDict::from_pairs([("gk", "tidak"), ("sy", "saya")]);
        let once = dict.apply("sy gk suka");
        assert_eq!(dict.apply(&once), once);
    }

    #[test]
    fn test_empty_dictionary_is_identity() {
        let dict = NormalizationDict::default();
        assert_eq!(dict.apply("apa saja"), "apa saja");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gk\ttidak").unwrap();
        writeln!(file, "malformed line without tab").unwrap();
        writeln!(file, "a\tb\tc").unwrap();
        writeln!(file, "bgt\tbanget").unwrap();

        let dict = NormalizationDict::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.apply("gk bgt"), "tidak banget");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dict = NormalizationDict::load_or_default("does-not-exist.txt");
        assert!(dict.is_empty());
        assert_eq!(dict.apply("tetap sama"), "tetap sama");
    }
}
