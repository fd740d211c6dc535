//! Indonesian lemmatization
//!
//! Deterministic token-to-lemma mapping behind the [`Lemmatize`] contract.
//! Unknown tokens pass through unchanged.

use std::collections::HashMap;

/// Capability contract: word-boundary tokenize the input and reduce each
/// token to its lemma, rejoining with single spaces.
pub trait Lemmatize {
    fn lemmatize(&self, text: &str) -> String;
}

/// Inflected form -> lemma table for common Indonesian affixed forms
/// (ber-/me-/pe-/ke-an derivations and -nya clitics).
const LEMMA_TABLE: &[(&str, &str)] = &[
    ("berlari", "lari"),
    ("berjalan", "jalan"),
    ("berbicara", "bicara"),
    ("bekerja", "kerja"),
    ("belajar", "ajar"),
    ("bermain", "main"),
    ("berpikir", "pikir"),
    ("berharap", "harap"),
    ("bertanya", "tanya"),
    ("makanan", "makan"),
    ("minuman", "minum"),
    ("membantu", "bantu"),
    ("membaca", "baca"),
    ("menulis", "tulis"),
    ("menolong", "tolong"),
    ("mengajar", "ajar"),
    ("mengajarkan", "ajar"),
    ("diajarkan", "ajar"),
    ("pengajaran", "ajar"),
    ("pelajaran", "ajar"),
    ("pembelajaran", "ajar"),
    ("pembelajarannya", "ajar"),
    ("menyukai", "suka"),
    ("disukai", "suka"),
    ("menyenangkan", "senang"),
    ("senangnya", "senang"),
    ("kesenangan", "senang"),
    ("menyedihkan", "sedih"),
    ("sedihnya", "sedih"),
    ("kesedihan", "sedih"),
    ("kebahagiaan", "bahagia"),
    ("memuaskan", "puas"),
    ("kepuasan", "puas"),
    ("mengecewakan", "kecewa"),
    ("kekecewaan", "kecewa"),
    ("membosankan", "bosan"),
    ("menarik", "tarik"),
    ("tertarik", "tarik"),
    ("perbaikan", "baik"),
    ("terbaik", "baik"),
    ("kebaikan", "baik"),
    ("memperbaiki", "baik"),
    ("keburukan", "buruk"),
    ("terburuk", "buruk"),
    ("menggunakan", "guna"),
    ("digunakan", "guna"),
    ("penggunaan", "guna"),
    ("pertanyaan", "tanya"),
    ("ditanyakan", "tanya"),
    ("menjawab", "jawab"),
    ("jawaban", "jawab"),
    ("dijawab", "jawab"),
    ("penilaian", "nilai"),
    ("menilai", "nilai"),
    ("dinilai", "nilai"),
    ("perasaan", "rasa"),
    ("merasa", "rasa"),
    ("merasakan", "rasa"),
    ("menyampaikan", "sampai"),
    ("disampaikan", "sampai"),
    ("penyampaian", "sampai"),
    ("kemudahan", "mudah"),
    ("memudahkan", "mudah"),
    ("dimudahkan", "mudah"),
    ("kesulitan", "sulit"),
    ("menyulitkan", "sulit"),
    ("membingungkan", "bingung"),
    ("kebingungan", "bingung"),
    ("harapan", "harap"),
    ("mengharapkan", "harap"),
    ("diharapkan", "harap"),
    ("dukungan", "dukung"),
    ("mendukung", "dukung"),
    ("didukung", "dukung"),
    ("bantuan", "bantu"),
    ("dibantu", "bantu"),
    ("pelayanan", "layan"),
    ("melayani", "layan"),
    ("dilayani", "layan"),
    ("keramahan", "ramah"),
    ("kecepatan", "cepat"),
    ("keterlambatan", "lambat"),
    ("terlambat", "lambat"),
    ("kebersihan", "bersih"),
    ("membersihkan", "bersih"),
    ("dibersihkan", "bersih"),
    ("kenyamanan", "nyaman"),
    ("keamanan", "aman"),
    ("keindahan", "indah"),
    ("pekerjaan", "kerja"),
    ("dikerjakan", "kerja"),
    ("mengerjakan", "kerja"),
    ("menyarankan", "saran"),
    ("disarankan", "saran"),
    ("memberikan", "beri"),
    ("diberikan", "beri"),
    ("pemberian", "beri"),
    ("menjelaskan", "jelas"),
    ("dijelaskan", "jelas"),
    ("penjelasan", "jelas"),
    ("memahami", "paham"),
    ("dipahami", "paham"),
    ("pemahaman", "paham"),
];

/// Dictionary-backed Indonesian lemmatizer
#[derive(Debug, Clone)]
pub struct IndonesianLemmatizer {
    lemmas: HashMap<&'static str, &'static str>,
}

impl Default for IndonesianLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl IndonesianLemmatizer {
    pub fn new() -> Self {
        Self {
            lemmas: LEMMA_TABLE.iter().copied().collect(),
        }
    }

    /// Lemma for a single token, identity when the form is unknown
    pub fn lemma_of<'a>(&self, word: &'a str) -> &'a str {
        self.lemmas.get(word).copied().unwrap_or(word)
    }
}

impl Lemmatize for IndonesianLemmatizer {
    fn lemmatize(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.lemmas.get(word).copied().unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
