use std::{fmt::Display, str::FromStr};

use crate::{AgentIndex, TieBreak};

/// Which flavour of tree search to run
///
/// All three share the exact same traversal, and only differ in how an opponent's options are
/// combined, whether branches may be pruned, and how ties at the root are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Opponents pick whatever is worst for agent 0
    Minimax,
    /// Minimax, skipping branches that provably can't change the result
    AlphaBeta,
    /// Opponents pick uniformly at random, so their nodes average their children
    Expectimax,
}

/// How a node turns the values of its children into its own value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[allow(missing_docs)]
    Max,
    #[allow(missing_docs)]
    Min,
    /// Every child is equally likely, so the value is their mean
    Chance,
}

impl NodeKind {
    /// Combine child values. `None` if there were no children to combine
    ///
    /// ```
    /// use multiagent_search::NodeKind;
    ///
    /// assert_eq!(NodeKind::Chance.combine([2.0, 4.0, 6.0]), Some(4.0));
    /// assert_eq!(NodeKind::Min.combine([2.0, 4.0, 6.0]), Some(2.0));
    /// assert_eq!(NodeKind::Max.combine(std::iter::empty()), None);
    /// ```
    pub fn combine(&self, values: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut values = values.into_iter();
        let first = values.next()?;

        let combined = match self {
            NodeKind::Max => values.fold(first, f64::max),
            NodeKind::Min => values.fold(first, f64::min),
            NodeKind::Chance => {
                let (sum, count) = values.fold((first, 1usize), |(sum, count), v| {
                    (sum + v, count + 1)
                });
                sum / count as f64
            }
        };

        Some(combined)
    }
}

impl Strategy {
    /// Every strategy, in the order the CLI lists them
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    /// The kind of node `agent` sits at under this strategy
    ///
    /// Agent 0 always maximizes. Opponents minimize, except in expectimax where they are chance
    /// nodes.
    pub fn node_kind(&self, agent: AgentIndex) -> NodeKind {
        match (self, agent.is_maximizer()) {
            (_, true) => NodeKind::Max,
            (Strategy::Expectimax, false) => NodeKind::Chance,
            (Strategy::Minimax | Strategy::AlphaBeta, false) => NodeKind::Min,
        }
    }

    /// Whether alpha-beta bounds are threaded through the search
    pub fn prunes(&self) -> bool {
        matches!(self, Strategy::AlphaBeta)
    }

    /// How agent 0's move is picked when several moves share the best value
    pub fn tie_break(&self) -> TieBreak {
        match self {
            Strategy::Minimax | Strategy::Expectimax => TieBreak::Random,
            Strategy::AlphaBeta => TieBreak::FirstFound,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectimax => "expectimax",
        };

        f.write_str(name)
    }
}

/// Returned when parsing a [Strategy] from a name we don't know
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strategy `{0}`, expected one of: minimax, alpha-beta, expectimax")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}
