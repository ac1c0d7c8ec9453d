use std::sync::Arc;

use derivative::Derivative;
use rand::Rng;
use tracing::debug;

use crate::{AgentIndex, GameState, TieBreak};

#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
/// A one move lookahead agent, with no notion of opponents
///
/// Every legal move of agent 0 is scored on its own, by looking at the state it leads to, and
/// one of the best scoring moves is picked at random.
pub struct ReflexAgent<GameType> {
    #[derivative(Debug = "ignore")]
    scorer: Arc<dyn Fn(&GameType, &GameType) -> f64 + Send + Sync>,
}

impl<GameType> ReflexAgent<GameType>
where
    GameType: GameState,
{
    /// Build an agent from a scorer that is handed the current state and then the state a move
    /// leads to
    pub fn new<F>(scorer: F) -> Self
    where
        F: Fn(&GameType, &GameType) -> f64 + Send + Sync + 'static,
    {
        Self {
            scorer: Arc::new(scorer),
        }
    }

    /// Pick a move, breaking ties with the thread local rng
    pub fn get_action(
        &self,
        state: &GameType,
    ) -> Result<Option<GameType::Action>, GameType::Error> {
        self.get_action_with_rng(state, &mut rand::thread_rng())
    }

    /// Pick a move, breaking ties with the given rng
    ///
    /// Returns `None` when agent 0 has no legal moves
    pub fn get_action_with_rng<R: Rng + ?Sized>(
        &self,
        state: &GameType,
        rng: &mut R,
    ) -> Result<Option<GameType::Action>, GameType::Error> {
        let scored = self.score_actions(state)?;

        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<_> = scored
            .into_iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| action)
            .collect();

        debug!(best_score, tied = best.len(), "reflex scored all moves");

        Ok(TieBreak::Random.choose(&best, rng).cloned())
    }

    /// Every legal move of agent 0 alongside its score, in the order the game listed them
    pub fn score_actions(
        &self,
        state: &GameType,
    ) -> Result<Vec<(GameType::Action, f64)>, GameType::Error> {
        state
            .legal_actions(AgentIndex::MAXIMIZER)
            .into_iter()
            .map(|action| {
                let successor = state.successor(AgentIndex::MAXIMIZER, &action)?;
                let score = (self.scorer)(state, &successor);

                Ok((action, score))
            })
            .collect()
    }
}
