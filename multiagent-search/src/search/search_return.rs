use std::fmt::Debug;

use itertools::Itertools;
use text_trees::StringTreeNode;

use crate::{AgentIndex, NodeKind};

/// Why the search stopped expanding at a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafReason {
    /// The state was a win or a loss
    Terminal,
    /// A successor of the last agent's move in the final ply
    Horizon,
    /// The agent to move had no legal actions in a state that wasn't won or lost
    NoLegalActions,
}

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a search
/// It contains everything we learned about the part of the game tree we visited
pub enum SearchReturn<Action: Clone + Debug> {
    /// This is a non-leaf node in the game tree
    /// We have information about all the options we looked at as well as the chosen value
    Node {
        /// Which agent was moving at this node
        agent: AgentIndex,
        /// Whether we maximized, minimized or averaged here
        kind: NodeKind,
        /// The ply this node was in, starting from 1 at the root
        depth: usize,
        /// The value of this node, combined from its options
        value: f64,
        /// Every move we explored from here, in exploration order, with what it led to.
        /// With alpha-beta this stops at the move that caused a cutoff
        options: Vec<(Action, Self)>,
        /// True if some moves at this node were skipped because of alpha-beta pruning
        alpha_beta_cutoff: bool,
    },
    /// Represents a leaf node in the game tree, whose value came straight from the evaluation
    /// function
    Leaf {
        #[allow(missing_docs)]
        value: f64,
        #[allow(missing_docs)]
        reason: LeafReason,
    },
}

impl<Action> SearchReturn<Action>
where
    Action: Clone + Debug,
{
    /// Returns the value of this node
    pub fn value(&self) -> f64 {
        match self {
            SearchReturn::Node { value, .. } => *value,
            SearchReturn::Leaf { value, .. } => *value,
        }
    }

    /// All the moves at this node that achieved the node's value, in the order we explored them
    ///
    /// Chance nodes don't choose a move, so every option is returned for them. Leaves have no
    /// moves at all
    pub fn best_actions(&self) -> Vec<&Action> {
        match self {
            SearchReturn::Leaf { .. } => vec![],
            SearchReturn::Node {
                kind: NodeKind::Chance,
                options,
                ..
            } => options.iter().map(|(action, _)| action).collect(),
            SearchReturn::Node { options, value, .. } => options
                .iter()
                .filter(|(_, result)| result.value() == *value)
                .map(|(action, _)| action)
                .collect(),
        }
    }

    /// Returns the moves along the 'route' through the tree the search expects to be played
    ///
    /// At every node we follow the first best option, so at chance nodes this is simply the
    /// first move explored. This is mostly useful for debugging
    pub fn chosen_route(&self) -> Vec<(AgentIndex, Action)> {
        match self {
            SearchReturn::Leaf { .. } => vec![],
            SearchReturn::Node {
                agent,
                options,
                value,
                kind,
                ..
            } => {
                let chosen = match kind {
                    NodeKind::Chance => options.first(),
                    _ => options.iter().find(|(_, r)| r.value() == *value),
                };

                if let Some((action, result)) = chosen {
                    let mut tail = result.chosen_route();
                    tail.insert(0, (*agent, action.clone()));
                    tail
                } else {
                    vec![]
                }
            }
        }
    }

    /// How many leaves this tree contains. Each one is exactly one call to the evaluation
    /// function
    pub fn leaf_count(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 1,
            SearchReturn::Node { options, .. } => {
                options.iter().map(|(_, result)| result.leaf_count()).sum()
            }
        }
    }

    /// How many interior nodes this tree contains
    pub fn node_count(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 0,
            SearchReturn::Node { options, .. } => {
                1 + options
                    .iter()
                    .map(|(_, result)| result.node_count())
                    .sum::<usize>()
            }
        }
    }

    /// How many nodes stopped early because of an alpha-beta cutoff
    pub fn cutoff_count(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 0,
            SearchReturn::Node {
                options,
                alpha_beta_cutoff,
                ..
            } => {
                usize::from(*alpha_beta_cutoff)
                    + options
                        .iter()
                        .map(|(_, result)| result.cutoff_count())
                        .sum::<usize>()
            }
        }
    }

    /// This returns a visual representation of the tree the search generated
    /// It shows the value, the moving agent and every move explored at each level
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_text_tree_node("root".to_owned()))
    }

    fn to_text_tree_node(&self, label: String) -> StringTreeNode {
        match self {
            SearchReturn::Leaf { value, reason } => {
                StringTreeNode::new(format!("{label} = {value} ({reason:?})"))
            }
            SearchReturn::Node {
                agent,
                kind,
                depth,
                value,
                options,
                alpha_beta_cutoff,
            } => {
                let pruned = if *alpha_beta_cutoff { " [pruned]" } else { "" };
                let mut node = StringTreeNode::new(format!(
                    "{label} = {value} ({kind:?} {agent}, ply {depth}){pruned}"
                ));

                for (action, result) in options {
                    node.push_node(result.to_text_tree_node(format!("{action:?}")));
                }

                node
            }
        }
    }

    /// The values of each explored option at this node, mostly useful in tests
    pub fn option_values(&self) -> Vec<(Action, f64)> {
        match self {
            SearchReturn::Leaf { .. } => vec![],
            SearchReturn::Node { options, .. } => options
                .iter()
                .map(|(action, result)| (action.clone(), result.value()))
                .collect_vec(),
        }
    }
}
