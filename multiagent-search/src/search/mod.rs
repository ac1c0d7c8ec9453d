//! The tree search itself. A single traversal handles all three [Strategy] variants
//!
//! Agent 0 always maximizes. Under minimax every other agent assumes the worst and minimizes,
//! under expectimax they are treated as picking uniformly at random. Alpha-beta computes the
//! same values as minimax but skips branches that can't change the answer.
//!
//! The search never looks past the configured depth. A depth of `d` means every agent gets to
//! move `d` times before states are scored.

mod score;
pub use score::{EvaluationFn, Scorable};

mod search_return;
pub use search_return::{LeafReason, SearchReturn};

mod strategy;
pub use strategy::{NodeKind, Strategy, UnknownStrategy};

mod bounds;
pub use bounds::Bounds;

mod eval;
pub use eval::{SearchAgent, SearchOptions, SearchOutcome, CLOSURE_EVALUATION};

#[cfg(test)]
pub(crate) mod fixtures;
