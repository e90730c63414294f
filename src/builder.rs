use crate::prelude::*;

/// Helper struct for the construction of a [`Dfa`]. It stores a list of edges, additional
/// states and symbols as well as the accepting states. The states and the alphabet of the
/// resulting automaton are inferred from everything that was handed to the builder, so
/// the only thing that can go wrong is a nondeterministic choice of edges.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']` that accepts
/// precisely the words with an odd number of `b`s. Additionally, the state 2 should exist, even
/// though it cannot be reached.
/// ```
/// use dfa_canon::prelude::*;
///
/// let dfa = DfaBuilder::default()
///     .with_edges([(0u32, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
///     .with_states([2])
///     .with_accepting([1])
///     .into_dfa(0)
///     .unwrap();
/// assert_eq!(dfa.size(), 3);
/// assert!(!dfa.accepts("abab".chars()));
/// assert!(!dfa.accepts("abb".chars()));
/// assert!(dfa.accepts("ab".chars()));
/// ```
#[derive(Clone, Debug)]
pub struct DfaBuilder<Q, S> {
    states: Vec<Q>,
    symbols: Vec<S>,
    edges: Vec<(Q, S, Q)>,
    accepting: Vec<Q>,
}

impl<Q, S> Default for DfaBuilder<Q, S> {
    fn default() -> Self {
        Self {
            states: vec![],
            symbols: vec![],
            edges: vec![],
            accepting: vec![],
        }
    }
}

impl<Q: StateId, S: Symbol> DfaBuilder<Q, S> {
    /// Adds states that should exist in the automaton, even if they appear on no edge.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// By default, the only alphabet symbols in the automaton that is built are the ones
    /// that appear on at least one edge. This method can be used to force additional
    /// alphabet symbols to appear.
    pub fn with_symbols<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Adds a list of edges `(source, symbol, target)` to `self`.
    pub fn with_edges<I: IntoIterator<Item = (Q, S, Q)>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Marks the given states as accepting. They are added to the states if necessary.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, accepting: I) -> Self {
        self.accepting.extend(accepting);
        self
    }

    /// Builds a [`Dfa`] with the given start state.
    pub fn into_dfa(self, start: Q) -> Result<Dfa<Q, S>, MalformedAutomaton> {
        let states: Vec<Q> = self
            .states
            .into_iter()
            .chain(self.edges.iter().flat_map(|(q, _, p)| [q.clone(), p.clone()]))
            .chain(self.accepting.iter().cloned())
            .chain(std::iter::once(start.clone()))
            .collect();
        let symbols: Vec<S> = self
            .symbols
            .into_iter()
            .chain(self.edges.iter().map(|(_, a, _)| a.clone()))
            .collect();
        Dfa::new(states, symbols, self.edges, start, self.accepting)
    }
}
