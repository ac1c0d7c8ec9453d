use std::path::PathBuf;

use color_eyre::eyre::Result;
use colored::Colorize;
use multiagent_search::{ReflexAgent, ScoredState};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::fixture::FixtureGame;

#[derive(clap::Args, Debug)]
pub(crate) struct Reflex {
    /// JSON fixture describing the game tree
    #[clap(value_parser)]
    fixture: PathBuf,

    /// Seed for breaking ties. Picks a random seed if not specified
    #[clap(long, value_parser)]
    seed: Option<u64>,
}

impl Reflex {
    pub(crate) fn run(self) -> Result<()> {
        let game = FixtureGame::load(&self.fixture)?;
        info!(fixture = %self.fixture.display(), "loaded fixture");
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Only the state a move leads to matters, opponents are ignored entirely
        let agent = ReflexAgent::new(|_: &FixtureGame, next: &FixtureGame| next.score());

        for (action, score) in agent.score_actions(&game)? {
            println!("{action}: {score}");
        }

        match agent.get_action_with_rng(&game, &mut rng)? {
            Some(action) => println!("Chosen move: {}", action.green().bold()),
            None => println!("{}", "No move, agent 0 has nothing to do here".yellow()),
        }

        Ok(())
    }
}
