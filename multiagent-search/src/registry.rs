use std::{collections::BTreeMap, fmt::Debug};

use crate::{search::EvaluationFn, ConfigError, ScoredState};

/// Name of the default evaluation, which scores a state by its running game score
pub const SCORE_EVALUATION: &str = "score";

/// A fixed table of named evaluation functions
///
/// Search agents are configured with a name, and that name is resolved against a registry once
/// when the agent is built. Unknown names fail right there, before any searching happens.
///
/// ```
/// use multiagent_search::{ConfigError, EvaluationRegistry, Scorable};
///
/// let mut registry: EvaluationRegistry<i32> = EvaluationRegistry::new();
/// registry.register("double", |n: &i32| f64::from(*n) * 2.0);
///
/// assert_eq!(registry.resolve("double").unwrap().score(&4), 8.0);
/// assert!(matches!(
///     registry.resolve("triple"),
///     Err(ConfigError::UnknownEvaluation { .. })
/// ));
/// ```
pub struct EvaluationRegistry<S> {
    functions: BTreeMap<String, EvaluationFn<S>>,
}

impl<S> Debug for EvaluationRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl<S> Clone for EvaluationRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
        }
    }
}

impl<S> Default for EvaluationRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> EvaluationRegistry<S> {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Add (or replace) the function stored under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        self.functions
            .insert(name.into(), EvaluationFn::new(function));
        self
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    /// Look up the function registered under `name`
    pub fn resolve(&self, name: &str) -> Result<EvaluationFn<S>, ConfigError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEvaluation {
                name: name.to_owned(),
                known: self.names(),
            })
    }
}

impl<S: ScoredState + 'static> EvaluationRegistry<S> {
    /// A registry holding [SCORE_EVALUATION]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SCORE_EVALUATION, |state: &S| state.score());
        registry
    }
}
