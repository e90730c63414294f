use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::prelude::*;

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and the state itself.
pub type MinimalRepresentative<'a, Q, S> = (Vec<S>, &'a Q);

/// Struct that can return the minimal representatives of a [`Dfa`]. A minimal representative
/// for a state `q` is the length-lexicographically minimal word with which `q` can be reached
/// from a given origin. States are produced in breadth-first order, so the iterator ends once
/// every state reachable from the origin has been produced.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a, Q: StateId, S: Symbol> {
    dfa: &'a Dfa<Q, S>,
    seen: Set<&'a Q>,
    queue: VecDeque<MinimalRepresentative<'a, Q, S>>,
}

impl<'a, Q: StateId, S: Symbol> MinimalRepresentatives<'a, Q, S> {
    /// Starts the search in `origin`. If `origin` is not a state of `dfa`, the iterator
    /// is empty.
    pub fn new(dfa: &'a Dfa<Q, S>, origin: &Q) -> Self {
        let mut seen = Set::default();
        let mut queue = VecDeque::new();
        if let Some(origin) = dfa.states().get(origin) {
            seen.insert(origin);
            queue.push_back((vec![], origin));
        }
        Self { dfa, seen, queue }
    }
}

impl<'a, Q: StateId, S: Symbol> Iterator for MinimalRepresentatives<'a, Q, S> {
    type Item = MinimalRepresentative<'a, Q, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let dfa = self.dfa;
        let (access, q) = self.queue.pop_front()?;
        for sym in dfa.alphabet().universe() {
            if let Some(p) = dfa.successor(q, sym) {
                if self.seen.insert(p) {
                    let mut new_access = access.clone();
                    new_access.push(sym.clone());
                    self.queue.push_back((new_access, p));
                }
            }
        }
        Some((access, q))
    }
}

/// Allows iterating over the states of a [`Dfa`] that are reachable from some origin.
#[derive(Debug, Clone)]
pub struct ReachableStates<'a, Q: StateId, S: Symbol>(MinimalRepresentatives<'a, Q, S>);

impl<'a, Q: StateId, S: Symbol> ReachableStates<'a, Q, S> {
    /// Starts the search in `origin`.
    pub fn new(dfa: &'a Dfa<Q, S>, origin: &Q) -> Self {
        Self(MinimalRepresentatives::new(dfa, origin))
    }
}

impl<'a, Q: StateId, S: Symbol> Iterator for ReachableStates<'a, Q, S> {
    type Item = &'a Q;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, q)| q)
    }
}

impl<Q: StateId, S: Symbol> Dfa<Q, S> {
    /// Returns an iterator over the minimal representatives of all states that can be
    /// reached from the start state.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_, Q, S> {
        MinimalRepresentatives::new(self, self.start())
    }

    /// Returns an iterator over the states reachable from the start state.
    pub fn reachable_states(&self) -> ReachableStates<'_, Q, S> {
        ReachableStates::new(self, self.start())
    }

    /// Returns an iterator over the states reachable from `origin`.
    pub fn reachable_states_from(&self, origin: &Q) -> ReachableStates<'_, Q, S> {
        ReachableStates::new(self, origin)
    }

    /// Returns true if every state is reachable from the start state.
    pub fn is_trim(&self) -> bool {
        self.reachable_states().count() == self.size()
    }

    /// Removes all states that are not reachable from the start state, together with
    /// the transitions leaving or entering them. Accepting states that are removed stop
    /// being accepting. Calling this on an automaton without unreachable states leaves it
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use dfa_canon::prelude::*;
    ///
    /// let mut dfa = DfaBuilder::default()
    ///     .with_edges([(0u32, 'a', 1), (2, 'a', 1)])
    ///     .with_accepting([2])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// dfa.prune();
    /// assert_eq!(dfa.sorted_states().collect::<Vec<_>>(), vec![&0, &1]);
    /// assert!(dfa.accepting().is_empty());
    /// assert_eq!(dfa.transition_count(), 1);
    /// ```
    pub fn prune(&mut self) {
        let reachable: Set<Q> = self.reachable_states().cloned().collect();
        let before = self.size();
        trace!("reachable states {}", Q::show_collection(&reachable));
        self.retain_states(|q| reachable.contains(q));
        debug!(
            removed = before - self.size(),
            remaining = self.size(),
            "pruned unreachable states"
        );
    }
}
