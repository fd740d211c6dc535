//! Text preprocessing pipeline
//!
//! Composes, in fixed order: cleaning, dictionary normalization, stopword
//! removal, lemmatization. The same pipeline instance must be applied at
//! train time and predict time, otherwise the classifier's learned feature
//! space is invalid for the prediction input.

mod cleaner;
mod lemmatizer;
mod normalizer;
mod stopwords;

pub use cleaner::clean;
pub use lemmatizer::{IndonesianLemmatizer, Lemmatize};
pub use normalizer::NormalizationDict;
pub use stopwords::{IndonesianStopwords, RemoveStopwords};

/// Fixed-order preprocessing pipeline over text values
pub struct Preprocessor {
    dictionary: NormalizationDict,
    stopwords: Box<dyn RemoveStopwords + Send + Sync>,
    lemmatizer: Box<dyn Lemmatize + Send + Sync>,
}

impl Preprocessor {
    /// Build a pipeline with the default Indonesian stopword remover and
    /// lemmatizer
    pub fn new(dictionary: NormalizationDict) -> Self {
        Self {
            dictionary,
            stopwords: Box::new(IndonesianStopwords::new()),
            lemmatizer: Box::new(IndonesianLemmatizer::new()),
        }
    }

    /// Substitute the stopword-removal capability
    pub fn with_stopword_remover(
        mut self,
        remover: Box<dyn RemoveStopwords + Send + Sync>,
    ) -> Self {
        self.stopwords = remover;
        self
    }

    /// Substitute the lemmatization capability
    pub fn with_lemmatizer(mut self, lemmatizer: Box<dyn Lemmatize + Send + Sync>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Run one text value through Clean -> Normalize -> Remove-stopwords ->
    /// Lemmatize. Total: empty input propagates as an empty string.
    pub fn process(&self, text: &str) -> String {
        let text = clean(text);
        let text = self.dictionary.apply(&text);
        let text = self.stopwords.remove(&text);
        self.lemmatizer.lemmatize(&text)
    }

    /// Run an ordered batch through the pipeline, preserving length and
    /// order
    pub fn process_batch(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.process(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> Preprocessor {
        Preprocessor::new(NormalizationDict::from_pairs([
            ("gk", "tidak"),
            ("bgt", "banget"),
        ]))
    }

    #[test]
    fn test_stage_order() {
        // "BGT" only normalizes if cleaning lowercased it first; "yang"
        // drops out in the stopword stage; "pelajaran" reaches the
        // lemmatizer after surviving the stopword filter.
        let out = pipeline().process("Suka BGT yang pelajaran!!!");
        assert_eq!(out, "suka banget ajar");
    }

    #[test]
    fn test_normalized_tokens_are_seen_by_the_stopword_filter() {
        // "gk" normalizes to "tidak", which the Indonesian list removes
        let out = pipeline().process("gk suka");
        assert_eq!(out, "suka");
    }

    #[test]
    fn test_empty_string_propagates() {
        assert_eq!(pipeline().process(""), "");
    }

    #[test]
    fn test_batch_preserves_length_and_order() {
        let texts = vec![
            "pelajaran menyenangkan".to_string(),
            String::new(),
            "gk suka".to_string(),
        ];
        let out = pipeline().process_batch(&texts);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "ajar senang");
        assert_eq!(out[1], "");
        // "gk" -> "tidak", which then falls to the stopword filter
        assert_eq!(out[2], "suka");
    }

    #[test]
    fn test_noise_only_input_becomes_empty() {
        assert_eq!(pipeline().process("@user #tag https://a.b 123"), "");
    }
}
