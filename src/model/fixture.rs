// StaticTopicModel — an in-memory snapshot of a trained model.
//
// Engines export their topic-word weights as JSON; this type loads that
// snapshot and serves it through the TopicModel trait so reports can run
// without the engine itself.

use std::cmp::Ordering;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::traits::{TopicModel, Vocabulary, WordId};

/// A complete model snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticTopicModel {
    /// Token for each word id (index = id)
    pub vocabulary: Vec<String>,
    /// One entry per topic, in topic index order
    pub topics: Vec<TopicWeights>,
}

/// The smoothing coefficient and word weights of one topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicWeights {
    pub smoothing: f64,
    /// Word weights in any order; ranking happens on read
    #[serde(default)]
    pub words: Vec<WordWeight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub id: WordId,
    pub weight: f64,
}

impl StaticTopicModel {
    /// Read a JSON snapshot from disk.
    ///
    /// Word ids are not checked against the vocabulary here. An unknown id
    /// only becomes an error when a report tries to resolve it.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model snapshot {}", path.display()))?;
        let model: StaticTopicModel = serde_json::from_str(&json)
            .with_context(|| format!("invalid model snapshot {}", path.display()))?;

        let unknown = model.unknown_word_ids();
        if unknown > 0 {
            warn!(
                path = %path.display(),
                unknown,
                "Model references word ids missing from its vocabulary"
            );
        }

        info!(
            path = %path.display(),
            topics = model.topics.len(),
            vocabulary = model.vocabulary.len(),
            "Loaded topic model snapshot"
        );
        Ok(model)
    }

    /// Count of word entries whose id has no token.
    fn unknown_word_ids(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|t| &t.words)
            .filter(|w| self.vocabulary.lookup(w.id).is_none())
            .count()
    }
}

impl TopicModel for StaticTopicModel {
    fn num_topics(&self) -> usize {
        self.topics.len()
    }

    fn smoothing(&self, topic: usize) -> f64 {
        self.topics[topic].smoothing
    }

    /// Descending weight, ties broken by ascending word id.
    fn ranked_words(&self, topic: usize) -> Vec<(WordId, f64)> {
        let mut ranked: Vec<(WordId, f64)> = self.topics[topic]
            .words
            .iter()
            .map(|w| (w.id, w.weight))
            .collect();
        ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });
        ranked
    }

    fn vocabulary(&self) -> &dyn Vocabulary {
        &self.vocabulary
    }
}
