use rand::{seq::SliceRandom, Rng};

/// How to pick one move out of several that share the best value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Uniformly at random among the tied moves
    Random,
    /// The first tied move in exploration order. Never consumes randomness
    FirstFound,
}

impl TieBreak {
    /// Pick one of `candidates`, or `None` if there aren't any
    ///
    /// ```
    /// use multiagent_search::TieBreak;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// assert_eq!(TieBreak::FirstFound.choose(&["a", "b"], &mut rng), Some(&"a"));
    /// assert!(TieBreak::Random.choose(&["a", "b"], &mut rng).is_some());
    /// assert_eq!(TieBreak::Random.choose::<&str, _>(&[], &mut rng), None);
    /// ```
    pub fn choose<'a, T, R: Rng + ?Sized>(
        &self,
        candidates: &'a [T],
        rng: &mut R,
    ) -> Option<&'a T> {
        match self {
            TieBreak::Random => candidates.choose(rng),
            TieBreak::FirstFound => candidates.first(),
        }
    }
}
