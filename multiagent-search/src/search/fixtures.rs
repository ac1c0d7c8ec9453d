//! Small games used by the tests in this crate

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{AgentIndex, GameState, ScoredState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exploded;

/// A game tree spelled out by hand
///
/// The tree already encodes whose turn it is, so legal actions ignore the agent. Only the root's
/// `num_agents` matters, it is copied onto every successor.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TreeGame {
    pub score: f64,
    pub outcome: Option<Outcome>,
    pub children: Vec<(&'static str, TreeGame)>,
    pub num_agents: usize,
    pub explodes: bool,
}

impl TreeGame {
    pub fn leaf(score: f64) -> Self {
        Self {
            score,
            outcome: None,
            children: vec![],
            num_agents: 2,
            explodes: false,
        }
    }

    pub fn win(score: f64) -> Self {
        Self {
            outcome: Some(Outcome::Win),
            ..Self::leaf(score)
        }
    }

    pub fn lose(score: f64) -> Self {
        Self {
            outcome: Some(Outcome::Lose),
            ..Self::leaf(score)
        }
    }

    pub fn branch(children: Vec<(&'static str, TreeGame)>) -> Self {
        Self {
            children,
            ..Self::leaf(0.0)
        }
    }

    /// An opponent node whose children are leaves with the given scores
    pub fn leaves(scores: &[(&'static str, f64)]) -> Self {
        Self::branch(
            scores
                .iter()
                .map(|(action, score)| (*action, TreeGame::leaf(*score)))
                .collect(),
        )
    }

    /// A node whose only move fails inside the simulation
    pub fn exploding() -> Self {
        Self {
            explodes: true,
            ..Self::leaves(&[("boom", 0.0)])
        }
    }

    pub fn with_agents(self, num_agents: usize) -> Self {
        Self { num_agents, ..self }
    }

    pub fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }
}

impl GameState for TreeGame {
    type Action = &'static str;
    type Error = Exploded;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Self::Action> {
        self.children.iter().map(|(action, _)| *action).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &Self::Action) -> Result<Self, Self::Error> {
        if self.explodes {
            return Err(Exploded);
        }

        let child = self
            .children
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, child)| child.clone())
            .ok_or(Exploded)?;

        Ok(child.with_agents(self.num_agents))
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }
}

impl ScoredState for TreeGame {
    fn score(&self) -> f64 {
        self.score
    }
}

/// A large pseudo random game, fully determined by its seed
///
/// Scores are small integers so plenty of values tie. Some states end the game, and some give an
/// agent nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RandomGame {
    pub num_agents: usize,
    path: u64,
    moves: usize,
}

impl RandomGame {
    pub fn new(seed: u64, num_agents: usize) -> Self {
        Self {
            num_agents,
            path: seed,
            moves: 0,
        }
    }

    fn rng(&self, salt: u64) -> StdRng {
        StdRng::seed_from_u64(self.path.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ salt)
    }

    pub fn score(&self) -> f64 {
        f64::from(self.rng(1).gen_range(-10..=10))
    }
}

impl GameState for RandomGame {
    type Action = u8;
    type Error = std::convert::Infallible;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Self::Action> {
        let mut rng = self.rng(2);
        let count = if self.moves > 0 && rng.gen_bool(0.05) {
            0
        } else {
            rng.gen_range(1..=4)
        };

        (0..count).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &Self::Action) -> Result<Self, Self::Error> {
        Ok(Self {
            num_agents: self.num_agents,
            path: self
                .path
                .wrapping_mul(31)
                .wrapping_add(u64::from(*action) + 1),
            moves: self.moves + 1,
        })
    }

    fn is_win(&self) -> bool {
        self.moves > 0 && self.rng(3).gen_bool(0.04)
    }

    fn is_lose(&self) -> bool {
        self.moves > 0 && self.rng(4).gen_bool(0.04)
    }
}

/// Every agent always has `branching` moves, and states remember who moved in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryGame {
    pub num_agents: usize,
    pub branching: usize,
    pub history: Vec<(AgentIndex, usize)>,
}

impl HistoryGame {
    pub fn new(num_agents: usize, branching: usize) -> Self {
        Self {
            num_agents,
            branching,
            history: vec![],
        }
    }
}

impl GameState for HistoryGame {
    type Action = usize;
    type Error = std::convert::Infallible;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Self::Action> {
        (0..self.branching).collect()
    }

    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Result<Self, Self::Error> {
        let mut history = self.history.clone();
        history.push((agent, *action));

        Ok(Self {
            history,
            ..self.clone()
        })
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }
}
