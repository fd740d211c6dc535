//! Indonesian stopword removal
//!
//! The stopword list itself is an external capability; the pipeline only
//! depends on the [`RemoveStopwords`] contract so an alternate language or
//! library can be substituted without touching the composition.

use std::collections::HashSet;

/// Capability contract: elide stopword tokens, preserve the relative order
/// of everything else.
pub trait RemoveStopwords {
    fn remove(&self, text: &str) -> String;
}

/// Indonesian stopword list (Sastrawi's)
const STOPWORDS: &[&str] = &[
    "yang", "untuk", "pada", "ke", "para", "namun", "menurut", "antara", "dia", "dua",
    "ia", "seperti", "jika", "jadi", "sehingga", "kembali", "dan", "tidak", "ini", "karena",
    "kepada", "oleh", "saat", "harus", "sementara", "setelah", "belum", "kami", "sekitar",
    "bagi", "serta", "di", "dari", "telah", "sebagai", "masih", "hal", "ketika", "adalah",
    "itu", "dalam", "bisa", "bahwa", "atau", "hanya", "kita", "dengan", "akan", "juga",
    "ada", "mereka", "sudah", "saya", "terhadap", "secara", "agar", "lain", "anda",
    "begitu", "mengapa", "kenapa", "yaitu", "yakni", "daripada", "itulah", "lagi", "maka",
    "tentang", "demi", "dimana", "kemana", "pula", "sambil", "sebelum", "sesudah",
    "supaya", "guna", "kah", "pun", "sampai", "sedangkan", "selagi", "tetapi", "apakah",
    "kecuali", "sebab", "selain", "seolah", "seraya", "seterusnya", "tanpa", "agak",
    "boleh", "dapat", "dsb", "dst", "dll", "dahulu", "dulunya", "anu", "demikian", "tapi",
    "ingin", "nggak", "mari", "nanti", "melainkan", "oh", "ok", "seharusnya",
    "sebetulnya", "setiap", "setidaknya", "sesuatu", "pasti", "saja", "toh", "ya",
    "walau", "tolong", "tentu", "amat", "apalagi", "bagaimanapun",
];

/// Stopword remover backed by the embedded Indonesian list
#[derive(Debug, Clone)]
pub struct IndonesianStopwords {
    words: HashSet<&'static str>,
}

impl Default for IndonesianStopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl IndonesianStopwords {
    pub fn new() -> Self {
        Self {
            words: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Number of stopwords in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl RemoveStopwords for IndonesianStopwords {
    fn remove(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.words.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
