/// The alpha-beta window threaded down the tree
///
/// `alpha` is the best value agent 0 can already force somewhere on the path from the root, and
/// `beta` is the lowest value the opponents can already force. Once `beta <= alpha` nothing left
/// at the current node can matter to an ancestor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    #[allow(missing_docs)]
    pub alpha: f64,
    #[allow(missing_docs)]
    pub beta: f64,
}

impl Bounds {
    /// The window the root starts with, (-inf, +inf)
    pub fn open() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    /// Called at a maximizing node after each child
    pub fn raise_alpha(&mut self, value: f64) {
        self.alpha = self.alpha.max(value);
    }

    /// Called at a minimizing node after each child
    pub fn lower_beta(&mut self, value: f64) {
        self.beta = self.beta.min(value);
    }

    /// Returns true once the remaining siblings can be skipped
    pub fn is_cut(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::open()
    }
}
