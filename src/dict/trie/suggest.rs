use typed_builder::TypedBuilder;

/// Outcome of a spellcheck query.
#[derive(Debug, PartialEq, Eq)]
pub enum Spellcheck {
    /// The whole word matched and is a stored word.
    Correct,
    /// Every stored word reachable from the longest matched prefix,
    /// lexicographic.
    Suggestions(Vec<String>),
}

/// Tuning knobs for suggestion collection. The defaults are maximally
/// permissive: any matched prefix anchors suggestions, including the
/// zero-length prefix, which suggests the entire dictionary.
#[derive(TypedBuilder, Default)]
pub struct SuggestConfig {
    /// Suggest nothing unless at least this many leading characters matched.
    #[builder(default)]
    pub min_prefix: usize,
    #[builder(default, setter(strip_option))]
    pub max_results: Option<usize>,
}
