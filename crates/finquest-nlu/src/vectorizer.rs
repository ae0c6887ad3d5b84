//! TF-IDF text vectorization
//!
//! Converts raw text into a fixed-dimension feature vector over a bounded
//! vocabulary learned from the training corpus. `fit` runs exactly once at
//! startup; `transform` is pure and deterministic given a fitted vectorizer.
//! Unseen terms at inference time are ignored, never an error.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

/// English stop words excluded from the vocabulary.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
        "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
        "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
        "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
        "why", "will", "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Tokenize into lowercase word terms of two or more characters, with stop
/// words removed. Alphanumeric runs stay together, so "r5000" is one term.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    lower
        .unicode_words()
        .filter(|word| word.chars().count() >= 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// TF-IDF vectorizer with a bounded vocabulary.
///
/// Vocabulary terms are selected by total corpus term frequency (alphabetical
/// tie-break) up to `max_features`, then indexed in sorted term order so the
/// feature layout is deterministic. IDF uses the smoothed form
/// `ln((1 + n) / (1 + df)) + 1` and transform output is L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from the corpus texts.
    pub fn fit(documents: &[&str], max_features: usize) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

        let mut corpus_tf: HashMap<String, usize> = HashMap::new();
        let mut document_freq: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                *corpus_tf.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token) {
                    *document_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // Retain the most frequent terms; alphabetical tie-break keeps the
        // selection deterministic.
        let mut terms: Vec<(String, usize)> = corpus_tf.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(max_features);

        let mut vocabulary: Vec<String> = terms.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = document_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        tracing::debug!(
            vocabulary_size = vocabulary.len(),
            documents = documents.len(),
            "fitted tf-idf vectorizer"
        );

        Self {
            vocabulary,
            index,
            idf,
        }
    }

    /// Transform text into an L2-normalized tf-idf vector.
    ///
    /// Terms outside the fitted vocabulary leave their entries at zero.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&i) = self.index.get(&token) {
                vector[i] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    /// Number of terms in the fitted vocabulary (the feature dimension).
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
