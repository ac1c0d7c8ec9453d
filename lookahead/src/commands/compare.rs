use color_eyre::eyre::{eyre, Result};
use colored::Colorize;
use multiagent_search::Strategy;

use super::SearchArgs;

#[derive(clap::Args, Debug)]
pub(crate) struct Compare {
    #[clap(flatten)]
    search: SearchArgs,
}

impl Compare {
    pub(crate) fn run(self) -> Result<()> {
        let game = self.search.game()?;
        let mut rng = self.search.rng();

        println!(
            "{:<12}{:>10}  {:<12}{:>8}{:>9}",
            "strategy", "value", "move", "leaves", "cutoffs"
        );

        let mut minimax_value = None;
        let mut alpha_beta_value = None;

        for strategy in Strategy::ALL {
            let agent = self.search.agent(strategy)?;
            let outcome = agent.choose(&game, &mut rng)?;

            println!(
                "{:<12}{:>10}  {:<12}{:>8}{:>9}",
                strategy.to_string(),
                outcome.value,
                outcome.action.as_deref().unwrap_or("-"),
                outcome.tree.leaf_count(),
                outcome.tree.cutoff_count()
            );

            match strategy {
                Strategy::Minimax => minimax_value = Some(outcome.value),
                Strategy::AlphaBeta => alpha_beta_value = Some(outcome.value),
                Strategy::Expectimax => {}
            }
        }

        if minimax_value != alpha_beta_value {
            println!("{}", "minimax and alpha-beta disagree".red().bold());

            return Err(eyre!(
                "Alpha-beta found {:?} but minimax found {:?}",
                alpha_beta_value,
                minimax_value
            ));
        }

        Ok(())
    }
}
