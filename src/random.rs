use tracing::debug;

use crate::prelude::*;

/// Generator for random, possibly partial, [`Dfa`]s over the states `0..states` and the
/// first `symbols` letters of the alphabet. The generation works as follows:
/// 1. Create `states` states, the start state is `0`.
/// 2. For every state and every symbol, with probability `transition_density` draw a
///    target uniformly among all states and insert the transition. Otherwise the
///    transition stays undefined.
/// 3. Every state is made accepting with probability `accepting_density`.
///
/// Note that the result may contain states that are not reachable from the start state.
/// Fixing a seed makes the generation reproducible.
#[derive(Clone, Debug)]
pub struct RandomDfa {
    states: usize,
    symbols: usize,
    transition_density: f64,
    accepting_density: f64,
    seed: Option<u64>,
}

impl RandomDfa {
    /// Prepares the generation of automata with `states` states over `symbols` symbols.
    /// By default every transition is defined and half of the states are accepting.
    ///
    /// # Panics
    /// Panics if `states` is zero or if `symbols` exceeds the 26 letters `a` to `z`.
    pub fn new(states: usize, symbols: usize) -> Self {
        assert!(states > 0, "an automaton needs at least a start state");
        assert!(symbols <= 26, "at most 26 symbols are supported");
        Self {
            states,
            symbols,
            transition_density: 1.0,
            accepting_density: 0.5,
            seed: None,
        }
    }

    /// Sets the probability with which a transition is defined.
    pub fn with_transition_density(mut self, density: f64) -> Self {
        self.transition_density = density.clamp(0.0, 1.0);
        self
    }

    /// Sets the probability with which a state is accepting.
    pub fn with_accepting_density(mut self, density: f64) -> Self {
        self.accepting_density = density.clamp(0.0, 1.0);
        self
    }

    /// Fixes the seed of the random number generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws a random automaton.
    pub fn generate(&self) -> Dfa<u32, char> {
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let alphabet = Alphabet::of_size(self.symbols);
        let size = self.states as u32;

        let states: Set<u32> = (0..size).collect();
        let mut transitions: Map<(u32, char), u32> = Map::default();
        for q in 0..size {
            for sym in alphabet.universe() {
                if rng.f64() < self.transition_density {
                    transitions.insert((q, *sym), rng.u32(..size));
                }
            }
        }
        let accepting: Set<u32> = (0..size)
            .filter(|_| rng.f64() < self.accepting_density)
            .collect();

        debug!(
            states = size,
            symbols = self.symbols,
            transitions = transitions.len(),
            seed = self.seed,
            "generated random automaton"
        );
        Dfa::from_parts_unchecked(states, alphabet, transitions, 0, accepting)
    }
}
