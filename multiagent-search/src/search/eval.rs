use derivative::Derivative;
use rand::Rng;
use tracing::{info, info_span, trace, warn};

use crate::{
    registry::SCORE_EVALUATION, ConfigError, EvaluationRegistry, GameState, LeafReason, NodeKind,
    Strategy, Turn,
};

use super::{Bounds, EvaluationFn, Scorable, SearchReturn};

/// What a [SearchAgent] built with [SearchAgent::from_fn] reports as its evaluation name
pub const CLOSURE_EVALUATION: &str = "<closure>";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything needed to configure a [SearchAgent] besides its [Strategy]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use multiagent_search::SearchOptions;
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.evaluation_function, "score");
/// assert_eq!(defaults.depth, 3);
/// ```
pub struct SearchOptions {
    /// Name of the evaluation function, looked up in an [EvaluationRegistry]
    pub evaluation_function: String,
    /// How many plies to look ahead. A ply is one move by every agent
    ///
    /// Defaults to 3
    pub depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            evaluation_function: SCORE_EVALUATION.to_owned(),
            depth: 3,
        }
    }
}

/// The result of a full search from the root
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<Action: Clone + std::fmt::Debug> {
    /// The move agent 0 should make. `None` when the root is over, or agent 0 has no moves
    pub action: Option<Action>,
    /// The value of the root
    pub value: f64,
    /// Everything the search looked at
    pub tree: SearchReturn<Action>,
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
/// This is the struct that pairs a [Strategy] with an evaluation function and a search depth, and
/// can be used to pick moves for agent 0
///
/// Nothing is kept between searches, so one agent can be reused for as many states as you like.
///
/// Every strategy walks the tree the same way. Agents move in index order and a ply ends after
/// the last agent has moved. At the last agent's move in the final ply the successors are scored
/// directly instead of being searched further. Won or lost states are scored the moment they are
/// reached.
///
/// The work grows like `O(b^(n * d))` for branching factor `b`, `n` agents and depth `d`.
/// Alpha-beta only shrinks the practical constant, never that bound, and expectimax always
/// visits the whole tree. Recursion never goes deeper than `n * d` frames, so keep both small.
///
/// It also outputs traces using the [tracing] crate.
pub struct SearchAgent<GameType> {
    strategy: Strategy,
    depth: usize,
    evaluation_name: String,
    #[derivative(Debug = "ignore")]
    evaluation: EvaluationFn<GameType>,
}

impl<GameType> SearchAgent<GameType>
where
    GameType: GameState,
{
    /// Construct a new `SearchAgent`, resolving the evaluation function named in `options`
    ///
    /// This fails if the name isn't in the `registry`, or the depth is zero
    pub fn new(
        strategy: Strategy,
        registry: &EvaluationRegistry<GameType>,
        options: SearchOptions,
    ) -> Result<Self, ConfigError> {
        if options.depth == 0 {
            return Err(ConfigError::ZeroHorizon);
        }

        let evaluation = registry.resolve(&options.evaluation_function)?;

        Ok(Self {
            strategy,
            depth: options.depth,
            evaluation_name: options.evaluation_function,
            evaluation,
        })
    }

    /// Construct a new `SearchAgent` straight from an evaluation function, skipping the registry
    pub fn from_fn<F>(strategy: Strategy, evaluation: F, depth: usize) -> Result<Self, ConfigError>
    where
        F: Fn(&GameType) -> f64 + Send + Sync + 'static,
    {
        if depth == 0 {
            return Err(ConfigError::ZeroHorizon);
        }

        Ok(Self {
            strategy,
            depth,
            evaluation_name: CLOSURE_EVALUATION.to_owned(),
            evaluation: EvaluationFn::new(evaluation),
        })
    }

    #[allow(missing_docs)]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[allow(missing_docs)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The registry name the evaluation was resolved from, or [CLOSURE_EVALUATION]
    pub fn evaluation_name(&self) -> &str {
        &self.evaluation_name
    }

    /// Pick the next move for agent 0, breaking ties with the thread local rng
    pub fn get_action(
        &self,
        state: &GameType,
    ) -> Result<Option<GameType::Action>, GameType::Error> {
        self.get_action_with_rng(state, &mut rand::thread_rng())
    }

    /// Pick the next move for agent 0, breaking ties with the given rng
    pub fn get_action_with_rng<R: Rng + ?Sized>(
        &self,
        state: &GameType,
        rng: &mut R,
    ) -> Result<Option<GameType::Action>, GameType::Error> {
        Ok(self.choose(state, rng)?.action)
    }

    /// Search from `state` and pick agent 0's move, returning the whole searched tree alongside it
    ///
    /// The random draw for breaking ties happens here, after the search is finished, and only for
    /// strategies that break ties randomly
    pub fn choose<R: Rng + ?Sized>(
        &self,
        state: &GameType,
        rng: &mut R,
    ) -> Result<SearchOutcome<GameType::Action>, GameType::Error> {
        let current_span = info_span!(
            "search",
            strategy = %self.strategy,
            depth = self.depth,
            evaluation = %self.evaluation_name,
            num_agents = state.num_agents(),
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            leaf_evaluations = tracing::field::Empty,
        );
        let _entered = current_span.enter();

        let tree = self.search(state)?;

        let candidates = tree.best_actions();
        let action = self
            .strategy
            .tie_break()
            .choose(&candidates, rng)
            .map(|action| (*action).clone());

        let value = tree.value();
        let leaf_evaluations = tree.leaf_count();

        current_span.record("chosen_value", value);
        current_span.record("chosen_action", format!("{:?}", action).as_str());
        current_span.record("leaf_evaluations", leaf_evaluations);

        info!(
            value,
            leaf_evaluations,
            tied = candidates.len(),
            "finished search"
        );

        Ok(SearchOutcome {
            action,
            value,
            tree,
        })
    }

    /// This runs the search from `state` to the configured depth, returning a struct that
    /// contains all the information about the tree we searched
    ///
    /// The return value is a recursive struct that tells you the value of the root, and the value
    /// of every child we explored under it
    pub fn search(
        &self,
        state: &GameType,
    ) -> Result<SearchReturn<GameType::Action>, GameType::Error> {
        self.search_turn(state, Turn::root(), Bounds::open())
    }

    fn leaf(&self, state: &GameType, reason: LeafReason) -> SearchReturn<GameType::Action> {
        SearchReturn::Leaf {
            value: self.evaluation.score(state),
            reason,
        }
    }

    fn search_turn(
        &self,
        node: &GameType,
        turn: Turn,
        bounds: Bounds,
    ) -> Result<SearchReturn<GameType::Action>, GameType::Error> {
        let mut bounds = bounds;

        if node.is_terminal() {
            return Ok(self.leaf(node, LeafReason::Terminal));
        }

        let possible_moves = node.legal_actions(turn.agent);
        if possible_moves.is_empty() {
            warn!(
                agent = %turn.agent,
                depth = turn.depth,
                "No legal actions in a state that isn't over, scoring it as a leaf"
            );
            return Ok(self.leaf(node, LeafReason::NoLegalActions));
        }

        let num_agents = node.num_agents();
        let kind = self.strategy.node_kind(turn.agent);
        let at_horizon = turn.is_horizon(self.depth, num_agents);
        let next_turn = turn.advance(num_agents);

        let mut options = Vec::with_capacity(possible_moves.len());
        let mut alpha_beta_cutoff = false;

        for (explored, action) in possible_moves.iter().enumerate() {
            let successor = node.successor(turn.agent, action)?;

            let next_return = if !at_horizon {
                self.search_turn(&successor, next_turn, bounds)?
            } else if successor.is_terminal() {
                self.leaf(&successor, LeafReason::Terminal)
            } else {
                self.leaf(&successor, LeafReason::Horizon)
            };
            let value = next_return.value();
            options.push((action.clone(), next_return));

            if !self.strategy.prunes() {
                continue;
            }

            match kind {
                NodeKind::Max => bounds.raise_alpha(value),
                NodeKind::Min => bounds.lower_beta(value),
                NodeKind::Chance => continue,
            }

            let remaining = possible_moves.len() - explored - 1;
            if bounds.is_cut() && remaining > 0 {
                trace!(
                    agent = %turn.agent,
                    depth = turn.depth,
                    alpha = bounds.alpha,
                    beta = bounds.beta,
                    remaining,
                    "alpha-beta cutoff"
                );
                alpha_beta_cutoff = true;
                break;
            }
        }

        let value = match kind.combine(options.iter().map(|(_, result)| result.value())) {
            Some(value) => value,
            None => return Ok(self.leaf(node, LeafReason::NoLegalActions)),
        };

        Ok(SearchReturn::Node {
            agent: turn.agent,
            kind,
            depth: turn.depth,
            value,
            options,
            alpha_beta_cutoff,
        })
    }
}
