use std::{fmt::Debug, sync::Arc};

/// This trait is used to control something that can return a score from a game state
///
/// Scores are plain `f64`s where higher is better for agent 0. Expectimax averages them, so they
/// need to be real numbers rather than anything merely `Ord`.
pub trait Scorable<GameType> {
    /// Score the given state
    fn score(&self, game: &GameType) -> f64;
}

impl<GameType, FnLike: Fn(&GameType) -> f64> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> f64 {
        (self)(game)
    }
}

/// A shared handle to a leaf evaluation
///
/// This is what an [crate::EvaluationRegistry] hands out, and what a [crate::SearchAgent] holds
/// on to for its whole life. Cloning it is cheap.
pub struct EvaluationFn<GameType>(Arc<dyn Fn(&GameType) -> f64 + Send + Sync>);

impl<GameType> EvaluationFn<GameType> {
    /// Wrap a plain function or closure
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&GameType) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }
}

impl<GameType> Clone for EvaluationFn<GameType> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<GameType> Debug for EvaluationFn<GameType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EvaluationFn")
    }
}

impl<GameType> Scorable<GameType> for EvaluationFn<GameType> {
    fn score(&self, game: &GameType) -> f64 {
        (self.0)(game)
    }
}
