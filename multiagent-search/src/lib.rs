#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth limited adversarial search for turn based games with any number
//! of agents. You provide the game, through the [GameState] trait, and a 'scoring' function that
//! turns a state into an `f64` where higher is better for agent 0.
//!
//! Three strategies are available, see [Strategy]. They all share one traversal so they agree on
//! turn order and depth counting.
//!
//! ```rust
//! use std::convert::Infallible;
//! use multiagent_search::{AgentIndex, GameState, SearchAgent, Strategy};
//!
//! // Agent 0 adds 3 or 5 to a running total, then agent 1 takes away 1 or 2
//! #[derive(Debug, Clone)]
//! struct Pick {
//!     total: i32,
//! }
//!
//! impl GameState for Pick {
//!     type Action = i32;
//!     type Error = Infallible;
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, agent: AgentIndex) -> Vec<i32> {
//!         if agent.is_maximizer() {
//!             vec![3, 5]
//!         } else {
//!             vec![-1, -2]
//!         }
//!     }
//!
//!     fn successor(&self, _agent: AgentIndex, action: &i32) -> Result<Self, Infallible> {
//!         Ok(Pick {
//!             total: self.total + action,
//!         })
//!     }
//!
//!     fn is_win(&self) -> bool {
//!         false
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let agent = SearchAgent::from_fn(Strategy::AlphaBeta, |p: &Pick| f64::from(p.total), 1).unwrap();
//! let start = Pick { total: 0 };
//!
//! assert_eq!(agent.get_action(&start).unwrap(), Some(5));
//! assert_eq!(agent.search(&start).unwrap().value(), 3.0);
//! ```

mod error;
pub use error::ConfigError;

mod state;
pub use state::{AgentIndex, GameState, ScoredState, Turn};

mod registry;
pub use registry::{EvaluationRegistry, SCORE_EVALUATION};

mod tie_break;
pub use tie_break::TieBreak;

pub mod search;
pub use search::{
    Bounds, EvaluationFn, LeafReason, NodeKind, Scorable, SearchAgent, SearchOptions,
    SearchOutcome, SearchReturn, Strategy, UnknownStrategy, CLOSURE_EVALUATION,
};

mod reflex;
pub use reflex::ReflexAgent;
