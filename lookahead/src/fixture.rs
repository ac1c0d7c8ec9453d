use std::{fs::read_to_string, path::Path, sync::Arc};

use color_eyre::eyre::{eyre, Result, WrapErr};
use multiagent_search::{AgentIndex, EvaluationRegistry, GameState, ScoredState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Outcome {
    Win,
    Lose,
}

/// One node of a hand written game tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct FixtureNode {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub children: Vec<FixtureChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct FixtureChild {
    pub action: String,
    pub node: FixtureNode,
}

/// The JSON file format. The tree itself decides whose turn it is, `num_agents` only tells the
/// search how many moves make up a ply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct FixtureFile {
    pub num_agents: usize,
    pub root: FixtureNode,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum FixtureError {
    #[error("No move `{action}` after [{}]", path.join(", "))]
    UnknownAction { action: String, path: Vec<String> },
}

/// A position in a fixture tree, addressed by the moves taken from the root
#[derive(Debug, Clone)]
pub(crate) struct FixtureGame {
    file: Arc<FixtureFile>,
    path: Vec<usize>,
}

impl FixtureGame {
    pub fn new(file: FixtureFile) -> Result<Self> {
        if file.num_agents == 0 {
            return Err(eyre!("A fixture needs at least one agent"));
        }

        Ok(Self {
            file: Arc::new(file),
            path: vec![],
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)
            .wrap_err_with(|| format!("Couldn't read fixture {}", path.display()))?;

        Self::from_json(&contents).wrap_err_with(|| format!("Invalid fixture {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: FixtureFile = serde_json::from_str(json)?;

        Self::new(file)
    }

    pub fn node(&self) -> &FixtureNode {
        self.path
            .iter()
            .fold(&self.file.root, |node, &index| &node.children[index].node)
    }

    fn route(&self) -> Vec<String> {
        let mut node = &self.file.root;
        let mut route = Vec::with_capacity(self.path.len());

        for &index in &self.path {
            let child = &node.children[index];
            route.push(child.action.clone());
            node = &child.node;
        }

        route
    }
}

impl GameState for FixtureGame {
    type Action = String;
    type Error = FixtureError;

    fn num_agents(&self) -> usize {
        self.file.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<String> {
        self.node()
            .children
            .iter()
            .map(|child| child.action.clone())
            .collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &String) -> Result<Self, FixtureError> {
        let index = self
            .node()
            .children
            .iter()
            .position(|child| &child.action == action)
            .ok_or_else(|| FixtureError::UnknownAction {
                action: action.clone(),
                path: self.route(),
            })?;

        let mut path = self.path.clone();
        path.push(index);

        Ok(Self {
            file: self.file.clone(),
            path,
        })
    }

    fn is_win(&self) -> bool {
        self.node().outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.node().outcome == Some(Outcome::Lose)
    }
}

impl ScoredState for FixtureGame {
    fn score(&self) -> f64 {
        self.node().score
    }
}

/// Every evaluation function the CLI can be asked for by name
pub(crate) fn registry() -> EvaluationRegistry<FixtureGame> {
    let mut registry = EvaluationRegistry::with_defaults();
    registry.register("zero", |_: &FixtureGame| 0.0);
    registry
}
