use color_eyre::eyre::Result;
use colored::Colorize;
use itertools::Itertools;
use multiagent_search::Strategy;

use super::SearchArgs;

#[derive(clap::Args, Debug)]
pub(crate) struct Solve {
    #[clap(flatten)]
    search: SearchArgs,

    /// Which search to run: minimax, alpha-beta or expectimax
    #[clap(short, long, value_parser, default_value_t = Strategy::Minimax)]
    strategy: Strategy,

    /// Print every node the search visited
    #[clap(long, action, default_value = "false")]
    tree: bool,
}

impl Solve {
    pub(crate) fn run(self) -> Result<()> {
        let game = self.search.game()?;
        let agent = self.search.agent(self.strategy)?;
        let mut rng = self.search.rng();

        let outcome = agent.choose(&game, &mut rng)?;

        println!(
            "{} search to depth {}",
            self.strategy.to_string().bold(),
            agent.depth()
        );
        println!("Root value: {}", outcome.value);

        match &outcome.action {
            Some(action) => println!("Chosen move: {}", action.green().bold()),
            None => println!("{}", "No move, agent 0 has nothing to do here".yellow()),
        }

        let tied = outcome.tree.best_actions();
        if tied.len() > 1 {
            println!("Tied moves: {}", tied.iter().join(", "));
        }

        println!(
            "Leaf evaluations: {}, cutoffs: {}",
            outcome.tree.leaf_count(),
            outcome.tree.cutoff_count()
        );

        let route = outcome.tree.chosen_route();
        if !route.is_empty() {
            println!(
                "Expected line: {}",
                route
                    .iter()
                    .map(|(agent, action)| format!("{action} ({agent})"))
                    .join(" -> ")
            );
        }

        if self.tree {
            println!();
            println!("{}", outcome.tree.to_text_tree());
        }

        Ok(())
    }
}
