/// Everything that can go wrong while building a search agent
///
/// Once an agent exists, searching can only fail with the game's own error type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested evaluation function isn't in the registry
    #[error("Unknown evaluation function `{name}`, expected one of: {}", known.join(", "))]
    UnknownEvaluation {
        /// The name that was asked for
        name: String,
        /// Every name the registry knows about
        known: Vec<String>,
    },

    /// The search needs to look at least one ply ahead
    #[error("Search depth must be at least 1")]
    ZeroHorizon,
}
