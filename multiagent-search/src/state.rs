use std::fmt::{self, Debug, Display};

/// Identifies one of the agents taking turns in a game
///
/// Index 0 is always the maximizing agent, the one we are choosing a move for. Every other index
/// is an opponent, which minimizes in [crate::Strategy::Minimax] and
/// [crate::Strategy::AlphaBeta] and acts as a chance node in [crate::Strategy::Expectimax].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentIndex(pub usize);

impl AgentIndex {
    /// The agent we are searching on behalf of
    pub const MAXIMIZER: AgentIndex = AgentIndex(0);

    /// Returns true if this is agent 0
    pub fn is_maximizer(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this agent moves last in every round of a game with `num_agents` agents
    pub fn is_last(&self, num_agents: usize) -> bool {
        self.0 + 1 == num_agents
    }
}

impl Display for AgentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent {}", self.0)
    }
}

/// This is the contract the search engine consumes from the game simulation
///
/// The engine treats implementers as immutable values. It only ever asks for successors, it never
/// mutates a state it was handed.
pub trait GameState: Sized {
    /// An opaque move identifier. The engine compares and clones these but never interprets them
    type Action: Clone + Debug + PartialEq;

    /// Whatever the simulation can fail with. The search hands these back untouched
    type Error;

    /// Number of agents taking turns, fixed for the lifetime of a search and at least 1
    fn num_agents(&self) -> usize;

    /// The moves available to `agent`, in the order they should be explored
    ///
    /// This should be empty when the state is terminal or the agent has no moves
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state reached after `agent` plays `action`
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Result<Self, Self::Error>;

    #[allow(missing_docs)]
    fn is_win(&self) -> bool;

    #[allow(missing_docs)]
    fn is_lose(&self) -> bool;

    /// A decided game. These are evaluated immediately no matter how much depth remains
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A [GameState] that keeps a running score, which backs the default `score` evaluation
pub trait ScoredState: GameState {
    /// The game's own score for this state, higher is better for agent 0
    fn score(&self) -> f64;
}

/// Where the search currently is: which agent is about to move, and in which ply
///
/// A ply is a full round where every agent moves once. Plies are counted from 1 at the root and
/// only advance after the last agent in a round has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The agent about to move
    pub agent: AgentIndex,
    /// The current ply, starting at 1
    pub depth: usize,
}

impl Turn {
    /// Agent 0 at ply 1, where every search starts
    pub fn root() -> Self {
        Self {
            agent: AgentIndex::MAXIMIZER,
            depth: 1,
        }
    }

    /// The turn after the current agent has moved
    ///
    /// ```
    /// use multiagent_search::{AgentIndex, Turn};
    ///
    /// let turn = Turn::root().advance(2);
    /// assert_eq!(turn, Turn { agent: AgentIndex(1), depth: 1 });
    ///
    /// let turn = turn.advance(2);
    /// assert_eq!(turn, Turn { agent: AgentIndex(0), depth: 2 });
    /// ```
    pub fn advance(&self, num_agents: usize) -> Self {
        if self.agent.is_last(num_agents) {
            Self {
                agent: AgentIndex::MAXIMIZER,
                depth: self.depth + 1,
            }
        } else {
            Self {
                agent: AgentIndex(self.agent.0 + 1),
                depth: self.depth,
            }
        }
    }

    /// Returns true when this is the deepest layer we expand for the given `horizon`
    ///
    /// That is the last agent's move in the final ply. Its successors are evaluated directly
    /// instead of being searched.
    pub fn is_horizon(&self, horizon: usize, num_agents: usize) -> bool {
        self.depth == horizon && self.agent.is_last(num_agents)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn turn(agent: usize, depth: usize) -> Turn {
        Turn {
            agent: AgentIndex(agent),
            depth,
        }
    }

    #[test]
    fn test_depth_only_advances_after_last_agent() {
        let mut current = Turn::root();
        let mut seen = vec![];

        for _ in 0..6 {
            seen.push((current.agent.0, current.depth));
            current = current.advance(3);
        }

        assert_eq!(seen, vec![(0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(current, turn(0, 3));
    }

    #[test]
    fn test_single_agent_advances_every_move() {
        let root = Turn::root();

        assert!(root.agent.is_last(1));
        assert_eq!(root.advance(1), turn(0, 2));
    }

    #[test]
    fn test_horizon_is_last_agent_of_final_ply() {
        assert!(!Turn::root().is_horizon(1, 2));
        assert!(turn(1, 1).is_horizon(1, 2));
        assert!(!turn(1, 1).is_horizon(2, 2));
        assert!(turn(2, 2).is_horizon(2, 3));
        assert!(Turn::root().is_horizon(1, 1));
    }
}
