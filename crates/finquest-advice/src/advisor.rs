//! End-to-end advice pipeline
//!
//! The `Advisor` owns the trained vectorizer, classifier and extractor. It
//! goes through a single Uninitialized -> Ready transition at process start
//! ([`Advisor::train`]); everything after that is a pure, stateless
//! transform with no locking, no I/O and no per-request mutation, so one
//! trained instance can be shared across arbitrarily many concurrent
//! requests behind an `Arc`.

use finquest_core::{training_corpus, Category, QueryContext, TrainError};
use finquest_nlu::{ClassifierOptions, ContextExtractor, SoftmaxClassifier, TfidfVectorizer};

use crate::render::render;
use crate::templates::ONBOARDING;

/// Training-time options for the pipeline.
#[derive(Debug, Clone)]
pub struct AdvisorOptions {
    /// Vocabulary cap for the vectorizer.
    pub max_features: usize,
    pub classifier: ClassifierOptions,
}

impl Default for AdvisorOptions {
    fn default() -> Self {
        Self {
            max_features: 100,
            classifier: ClassifierOptions::default(),
        }
    }
}

/// Trained query-to-advice pipeline.
pub struct Advisor {
    vectorizer: TfidfVectorizer,
    classifier: SoftmaxClassifier,
    extractor: ContextExtractor,
}

impl Advisor {
    /// Train the pipeline from the embedded corpus.
    ///
    /// Runs exactly once at startup, synchronously, before any request is
    /// served. A degenerate corpus (empty or single-class) is a fatal
    /// configuration error.
    pub fn train(options: &AdvisorOptions) -> Result<Self, TrainError> {
        let corpus = training_corpus();
        let texts: Vec<&str> = corpus.iter().map(|example| example.text).collect();
        let labels: Vec<Category> = corpus.iter().map(|example| example.category).collect();

        let vectorizer = TfidfVectorizer::fit(&texts, options.max_features);
        let vectors: Vec<Vec<f64>> = texts
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        let classifier = SoftmaxClassifier::fit(&vectors, &labels, &options.classifier)?;

        tracing::info!(
            examples = corpus.len(),
            classes = classifier.classes().len(),
            vocabulary = vectorizer.vocabulary_size(),
            "advice model trained"
        );

        Ok(Self {
            vectorizer,
            classifier,
            extractor: ContextExtractor::new(),
        })
    }

    /// Turn a query into a rendered advice document.
    ///
    /// Total over all inputs: empty and whitespace-only queries short-circuit
    /// to the onboarding document; everything else is classified, slot-filled
    /// and rendered. Never fails, never returns an empty string.
    pub fn advise(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return ONBOARDING.to_string();
        }

        let vector = self.vectorizer.transform(&query.to_lowercase());
        let category = self.classifier.predict(&vector);
        let context = self.extractor.extract(query);
        tracing::debug!(%category, has_context = !context.is_empty(), "classified query");

        render(category, &context)
    }

    /// Classify without rendering. Exposed for diagnostics and tests.
    pub fn classify(&self, query: &str) -> Category {
        self.classifier
            .predict(&self.vectorizer.transform(&query.to_lowercase()))
    }

    /// Extract slots without rendering. Exposed for diagnostics and tests.
    pub fn extract(&self, query: &str) -> QueryContext {
        self.extractor.extract(query)
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
