//! Multinomial logistic regression classifier
//!
//! Trained once at startup over the vectorized corpus with full-batch
//! gradient descent on the softmax cross-entropy loss. The optimizer runs to
//! convergence or a bounded iteration cap; hitting the cap is not fatal — the
//! best available weights are used. After training the model is read-only.

use std::collections::HashMap;

use finquest_core::{Category, TrainError};

/// Training hyperparameters.
#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    /// Gradient descent iteration cap.
    pub max_iterations: usize,
    pub learning_rate: f64,
    /// Stop when the loss delta between iterations falls below this.
    pub convergence_tolerance: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            learning_rate: 0.5,
            convergence_tolerance: 1e-6,
        }
    }
}

/// Fitted softmax classifier: one weight row and bias per class.
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    classes: Vec<Category>,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl SoftmaxClassifier {
    /// Train on vectorized examples and their labels.
    ///
    /// Fails fast on an empty corpus or a corpus with a single class; both
    /// are startup-fatal configuration errors.
    pub fn fit(
        vectors: &[Vec<f64>],
        labels: &[Category],
        options: &ClassifierOptions,
    ) -> Result<Self, TrainError> {
        if vectors.is_empty() || labels.is_empty() {
            return Err(TrainError::EmptyCorpus);
        }

        // Classes present in the corpus, in the fixed Category order.
        let classes: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| labels.contains(c))
            .collect();
        if classes.len() < 2 {
            return Err(TrainError::SingleClass(classes[0]));
        }

        let class_index: HashMap<Category, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, i))
            .collect();
        let targets: Vec<usize> = labels.iter().map(|label| class_index[label]).collect();

        let n_classes = classes.len();
        let n_features = vectors[0].len();
        let n_examples = vectors.len() as f64;

        let mut weights = vec![vec![0.0; n_features]; n_classes];
        let mut biases = vec![0.0; n_classes];
        let mut previous_loss = f64::INFINITY;
        let mut converged_at = None;

        for iteration in 0..options.max_iterations {
            let mut grad_weights = vec![vec![0.0; n_features]; n_classes];
            let mut grad_biases = vec![0.0; n_classes];
            let mut loss = 0.0;

            for (vector, &target) in vectors.iter().zip(&targets) {
                let scores: Vec<f64> = (0..n_classes)
                    .map(|c| dot(&weights[c], vector) + biases[c])
                    .collect();
                let probs = softmax(&scores);
                loss -= probs[target].max(1e-12).ln();

                for c in 0..n_classes {
                    let error = probs[c] - if c == target { 1.0 } else { 0.0 };
                    grad_biases[c] += error;
                    for (grad, x) in grad_weights[c].iter_mut().zip(vector) {
                        *grad += error * x;
                    }
                }
            }

            loss /= n_examples;
            let step = options.learning_rate / n_examples;
            for c in 0..n_classes {
                biases[c] -= step * grad_biases[c];
                for (w, grad) in weights[c].iter_mut().zip(&grad_weights[c]) {
                    *w -= step * grad;
                }
            }

            if (previous_loss - loss).abs() < options.convergence_tolerance {
                converged_at = Some((iteration, loss));
                break;
            }
            previous_loss = loss;
        }

        match converged_at {
            Some((iteration, loss)) => {
                tracing::debug!(iteration, loss, "classifier converged");
            }
            None => {
                // Not fatal: the best available weights still classify.
                tracing::warn!(
                    max_iterations = options.max_iterations,
                    "classifier hit the iteration cap without converging"
                );
            }
        }

        Ok(Self {
            classes,
            weights,
            biases,
        })
    }

    /// Predict the single best category for a feature vector.
    ///
    /// Always returns exactly one category: the argmax over class scores,
    /// with ties resolved by the fixed `Category::ALL` ordering. No
    /// probability is surfaced to the caller.
    pub fn predict(&self, vector: &[f64]) -> Category {
        let mut best = self.classes[0];
        let mut best_score = f64::NEG_INFINITY;
        for (c, &class) in self.classes.iter().enumerate() {
            let score = dot(&self.weights[c], vector) + self.biases[c];
            if score > best_score {
                best_score = score;
                best = class;
            }
        }
        best
    }

    /// Classes the model was trained on, in prediction tie-break order.
    pub fn classes(&self) -> &[Category] {
        &self.classes
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
