use std::{borrow::Borrow, fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::prelude::*;

/// Encapsulates what is necessary for a type to be usable as a state of a [`Dfa`]. States
/// are opaque identifiers, they only need to be compared, ordered, hashed and shown.
pub trait StateId: Clone + Eq + Ord + Hash + Debug + Show {}
impl<T: Clone + Eq + Ord + Hash + Debug + Show> StateId for T {}

/// A deterministic finite automaton over states of type `Q` and symbols of type `S`.
///
/// The transition relation is partial: for a pair of state and symbol there is at most
/// one transition, but there may also be none. A word that hits a missing transition is
/// rejected. The struct maintains that every state mentioned by the start state, the
/// accepting states and the transitions is declared in `states` and that every symbol
/// used by a transition is part of the alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa<Q: StateId, S: Symbol> {
    states: Set<Q>,
    alphabet: Alphabet<S>,
    transitions: Map<(Q, S), Q>,
    start: Q,
    accepting: Set<Q>,
}

impl<Q: StateId, S: Symbol> Dfa<Q, S> {
    /// Creates a new [`Dfa`] from its components and verifies that they fit together.
    /// Transitions are given as triples `(source, symbol, target)`. Giving the same
    /// triple twice is fine, giving two different targets for the same source and symbol
    /// is not.
    ///
    /// # Example
    /// ```
    /// use dfa_canon::prelude::*;
    ///
    /// let dfa = Dfa::new(
    ///     [0u32, 1],
    ///     ['a', 'b'],
    ///     [(0, 'a', 1), (1, 'b', 0)],
    ///     0,
    ///     [1],
    /// )
    /// .unwrap();
    /// assert!(dfa.accepts("aba".chars()));
    /// assert!(!dfa.accepts("ab".chars()));
    /// assert!(!dfa.accepts("b".chars()));
    ///
    /// assert!(matches!(
    ///     Dfa::new([0u32], ['a'], [(0, 'a', 1)], 0, []),
    ///     Err(MalformedAutomaton::UnknownTransitionTarget { .. })
    /// ));
    /// ```
    pub fn new<QI, SI, TI, AI>(
        states: QI,
        alphabet: SI,
        transitions: TI,
        start: Q,
        accepting: AI,
    ) -> Result<Self, MalformedAutomaton>
    where
        QI: IntoIterator<Item = Q>,
        SI: IntoIterator<Item = S>,
        TI: IntoIterator<Item = (Q, S, Q)>,
        AI: IntoIterator<Item = Q>,
    {
        let states: Set<Q> = states.into_iter().collect();
        let alphabet = Alphabet::new(alphabet);

        if !states.contains(&start) {
            return Err(MalformedAutomaton::UnknownStart(start.show()));
        }

        let accepting: Set<Q> = accepting.into_iter().collect();
        if let Some(q) = accepting.iter().sorted().find(|q| !states.contains(*q)) {
            return Err(MalformedAutomaton::UnknownAcceptingState(q.show()));
        }

        let mut map: Map<(Q, S), Q> = Map::default();
        for (source, symbol, target) in transitions {
            if !states.contains(&source) {
                return Err(MalformedAutomaton::UnknownTransitionSource {
                    state: source.show(),
                    symbol: symbol.show(),
                });
            }
            if !alphabet.contains(&symbol) {
                return Err(MalformedAutomaton::UnknownSymbol {
                    state: source.show(),
                    symbol: symbol.show(),
                });
            }
            if !states.contains(&target) {
                return Err(MalformedAutomaton::UnknownTransitionTarget {
                    state: source.show(),
                    symbol: symbol.show(),
                    target: target.show(),
                });
            }
            match map.get(&(source.clone(), symbol.clone())) {
                Some(existing) if existing != &target => {
                    return Err(MalformedAutomaton::ConflictingTransition {
                        state: source.show(),
                        symbol: symbol.show(),
                        first: existing.show(),
                        second: target.show(),
                    });
                }
                Some(_) => {}
                None => {
                    map.insert((source, symbol), target);
                }
            }
        }

        Ok(Self::from_parts_unchecked(
            states, alphabet, map, start, accepting,
        ))
    }

    /// Assembles a [`Dfa`] from components that are known to be well-formed.
    pub(crate) fn from_parts_unchecked(
        states: Set<Q>,
        alphabet: Alphabet<S>,
        transitions: Map<(Q, S), Q>,
        start: Q,
        accepting: Set<Q>,
    ) -> Self {
        debug_assert!(states.contains(&start));
        debug_assert!(accepting.is_subset(&states));
        debug_assert!(transitions
            .iter()
            .all(|((q, a), p)| states.contains(q) && alphabet.contains(a) && states.contains(p)));
        Self {
            states,
            alphabet,
            transitions,
            start,
            accepting,
        }
    }

    /// Creates a [`DfaBuilder`] which allows constructing a [`Dfa`] edge by edge.
    pub fn builder() -> DfaBuilder<Q, S> {
        DfaBuilder::default()
    }

    /// Returns the set of all states.
    pub fn states(&self) -> &Set<Q> {
        &self.states
    }

    /// Returns an iterator over all states in ascending order.
    pub fn sorted_states(&self) -> impl Iterator<Item = &Q> + '_ {
        self.states.iter().sorted()
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the (partial) transition function as a map from pairs of state and symbol
    /// to the target state.
    pub fn transitions(&self) -> &Map<(Q, S), Q> {
        &self.transitions
    }

    /// Returns an iterator over all transitions as triples `(source, symbol, target)`,
    /// ordered by source and then by symbol.
    pub fn edges(&self) -> impl Iterator<Item = (&Q, &S, &Q)> + '_ {
        self.transitions
            .iter()
            .map(|((q, a), p)| (q, a, p))
            .sorted()
    }

    /// Returns the designated start state.
    pub fn start(&self) -> &Q {
        &self.start
    }

    /// Returns the set of accepting states.
    pub fn accepting(&self) -> &Set<Q> {
        &self.accepting
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of defined transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if every state has a transition on every symbol of the alphabet.
    pub fn is_complete(&self) -> bool {
        self.transitions.len() == self.states.len() * self.alphabet.size()
    }

    /// Returns the state reached from `state` on reading `symbol`, or `None` if no such
    /// transition is defined.
    pub fn successor(&self, state: &Q, symbol: &S) -> Option<&Q> {
        self.transitions.get(&(state.clone(), symbol.clone()))
    }

    /// Runs the given word starting in `from` and returns the reached state. If the run
    /// hits a missing transition, `None` is returned.
    pub fn run_from<W>(&self, from: &Q, word: W) -> Option<&Q>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        let origin = self.states.get(from)?;
        word.into_iter()
            .try_fold(origin, |q, sym| self.successor(q, sym.borrow()))
    }

    /// Runs the given word from the start state and returns the reached state, if the run
    /// does not hit a missing transition.
    pub fn run<W>(&self, word: W) -> Option<&Q>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        self.run_from(&self.start, word)
    }

    /// Returns true if the run of `word` from the start state exists and ends in an
    /// accepting state.
    pub fn accepts<W>(&self, word: W) -> bool
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        self.run(word).is_some_and(|q| self.is_accepting(q))
    }

    /// Returns a string representation of the transition table. Every state is a row, every
    /// symbol a column and undefined transitions are displayed as `-`.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.universe().map(|s| s.show())),
        );
        for q in self.sorted_states() {
            let mut row = vec![q.show()];
            for sym in self.alphabet.universe() {
                match self.successor(q, sym) {
                    Some(p) => row.push(p.show()),
                    None => row.push("-".to_string()),
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }

    pub(crate) fn retain_states<F: Fn(&Q) -> bool>(&mut self, keep: F) {
        self.states.retain(|q| keep(q));
        self.transitions.retain(|(q, _), p| keep(q) && keep(&*p));
        self.accepting.retain(|q| keep(q));
    }
}

impl<Q: StateId, S: Symbol> std::fmt::Display for Dfa<Q, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "states: {}", Q::show_collection(self.sorted_states()))?;
        writeln!(f, "alphabet: {}", self.alphabet.show())?;
        writeln!(f, "transitions:\n{}", self.transition_table())?;
        writeln!(f, "start: {}", self.start.show())?;
        write!(
            f,
            "accepting: {}",
            Q::show_collection(self.accepting.iter().sorted())
        )
    }
}
