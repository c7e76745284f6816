// Read-only views onto a trained topic model.
//
// The estimation engine lives elsewhere. Reports only ever see a model through
// these traits, so any engine (or a fixture in tests) can be plugged in.

/// Integer identifier of a vocabulary word.
pub type WordId = u32;

/// Maps word ids to their string tokens.
pub trait Vocabulary {
    /// The token for `id`, or `None` if the id is unknown.
    fn lookup(&self, id: WordId) -> Option<&str>;
}

/// A trained topic model, consumed read-only.
pub trait TopicModel {
    /// Number of topics. Fixed for the lifetime of the model.
    fn num_topics(&self) -> usize;

    /// Smoothing coefficient (prior weight) of `topic`.
    fn smoothing(&self, topic: usize) -> f64;

    /// `(word id, weight)` pairs for `topic`, highest weight first.
    ///
    /// Callers take the order as given and must not rely on it being the
    /// same between calls.
    fn ranked_words(&self, topic: usize) -> Vec<(WordId, f64)>;

    /// The id-to-token mapping for every id `ranked_words` can return.
    fn vocabulary(&self) -> &dyn Vocabulary;
}

impl Vocabulary for Vec<String> {
    fn lookup(&self, id: WordId) -> Option<&str> {
        self.get(id as usize).map(String::as_str)
    }
}
