pub mod compare;
pub mod reflex;
pub mod solve;

use std::path::PathBuf;

use clap::Subcommand;
use color_eyre::eyre::Result;
use multiagent_search::{GameState, SearchAgent, SearchOptions, Strategy, SCORE_EVALUATION};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use compare::Compare;
use reflex::Reflex;
use solve::Solve;

use crate::fixture::{registry, FixtureGame};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Search a fixture with one strategy and print the chosen move
    Solve(Solve),
    /// Search a fixture with every strategy and compare the results
    Compare(Compare),
    /// Pick a move by looking only one move ahead
    Reflex(Reflex),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Solve(s) => s.run()?,
            Command::Compare(c) => c.run()?,
            Command::Reflex(r) => r.run()?,
        }

        Ok(())
    }
}

/// Options shared by every command that runs a search
#[derive(clap::Args, Debug)]
pub(crate) struct SearchArgs {
    /// JSON fixture describing the game tree
    #[clap(value_parser)]
    fixture: PathBuf,

    /// How many plies to search. Every agent moves once per ply
    #[clap(short, long, value_parser, default_value_t = 1)]
    depth: usize,

    /// Name of the evaluation function used on leaves
    #[clap(short, long, value_parser, default_value = SCORE_EVALUATION)]
    evaluation: String,

    /// Seed for breaking ties. Picks a random seed if not specified
    #[clap(long, value_parser)]
    seed: Option<u64>,
}

impl SearchArgs {
    pub(crate) fn game(&self) -> Result<FixtureGame> {
        let game = FixtureGame::load(&self.fixture)?;
        info!(
            fixture = %self.fixture.display(),
            num_agents = game.num_agents(),
            "loaded fixture"
        );

        Ok(game)
    }

    pub(crate) fn agent(&self, strategy: Strategy) -> Result<SearchAgent<FixtureGame>> {
        let options = SearchOptions {
            evaluation_function: self.evaluation.clone(),
            depth: self.depth,
        };

        let agent = SearchAgent::new(strategy, &registry(), options)?;
        debug!(?agent, "built search agent");

        Ok(agent)
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
