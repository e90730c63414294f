use std::collections::VecDeque;

use tracing::trace;

use crate::{math::Bijection, prelude::*};

/// Searches the product of `left` and `right` in breadth-first manner for a shortest word on
/// which exactly one of the two accepts. A side that is `None` has left its automaton
/// through a missing transition and rejects from then on.
fn shortest_separating_word<Q, P, S>(
    left: &Dfa<Q, S>,
    left_origin: Option<&Q>,
    right: &Dfa<P, S>,
    right_origin: Option<&P>,
) -> Option<Vec<S>>
where
    Q: StateId,
    P: StateId,
    S: Symbol,
{
    let alphabet = left.alphabet().union(right.alphabet());
    let verdicts_differ = |l: Option<&Q>, r: Option<&P>| {
        l.is_some_and(|q| left.is_accepting(q)) != r.is_some_and(|p| right.is_accepting(p))
    };

    let mut seen: Set<(Option<&Q>, Option<&P>)> = Set::default();
    let mut queue = VecDeque::from([(vec![], left_origin, right_origin)]);
    seen.insert((left_origin, right_origin));

    while let Some((word, l, r)) = queue.pop_front() {
        if verdicts_differ(l, r) {
            trace!("found separating word {}", word.show());
            return Some(word);
        }
        for sym in alphabet.universe() {
            let successors = (
                l.and_then(|q| left.successor(q, sym)),
                r.and_then(|p| right.successor(p, sym)),
            );
            if successors == (None, None) {
                continue;
            }
            if seen.insert(successors) {
                let mut extended = word.clone();
                extended.push(sym.clone());
                queue.push_back((extended, successors.0, successors.1));
            }
        }
    }
    None
}

impl<Q: StateId, S: Symbol> Dfa<Q, S> {
    /// Returns a shortest word that is accepted by exactly one of `self` and `other`, or
    /// `None` if the two automata accept the same language. A missing transition counts as
    /// a transition into a rejecting sink.
    ///
    /// # Example
    /// ```
    /// use dfa_canon::prelude::*;
    ///
    /// let even_a = DfaBuilder::default()
    ///     .with_edges([(0u32, 'a', 1), (1, 'a', 0)])
    ///     .with_accepting([0])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// let empty_word = DfaBuilder::default()
    ///     .with_symbols(['a'])
    ///     .with_accepting(["q"])
    ///     .into_dfa("q")
    ///     .unwrap();
    /// assert_eq!(even_a.separating_word(&empty_word), Some(vec!['a', 'a']));
    /// ```
    pub fn separating_word<P: StateId>(&self, other: &Dfa<P, S>) -> Option<Vec<S>> {
        shortest_separating_word(self, Some(self.start()), other, Some(other.start()))
    }

    /// Checks whether `self` and `other` accept the same language.
    pub fn equivalent<P: StateId>(&self, other: &Dfa<P, S>) -> bool {
        self.separating_word(other).is_none()
    }

    /// Attempts to separate the state `left` from the state `right` by finding a shortest word
    /// that is accepted from exactly one of them. Returns `None` if the two states are
    /// equivalent or one of them does not exist.
    pub fn separate(&self, left: &Q, right: &Q) -> Option<Vec<S>> {
        let l = self.states().get(left)?;
        let r = self.states().get(right)?;
        if l == r {
            return None;
        }
        shortest_separating_word(self, Some(l), self, Some(r))
    }

    /// Tries to find an isomorphism between `self` and `other`, i.e. a bijection between their
    /// states that maps the start state to the start state, preserves acceptance and maps
    /// every transition (as well as every missing transition) to one of `other`. The search
    /// proceeds from the start states, so if one of the automata has unreachable states,
    /// `None` is returned.
    pub fn isomorphism<P: StateId>(&self, other: &Dfa<P, S>) -> Option<Bijection<Q, P>> {
        if self.alphabet() != other.alphabet()
            || self.size() != other.size()
            || self.transition_count() != other.transition_count()
        {
            return None;
        }

        let mut bijection = Bijection::new();
        let mut queue = VecDeque::new();
        let pair = |q: &Q, p: &P, bijection: &mut Bijection<Q, P>| {
            if self.is_accepting(q) != other.is_accepting(p) {
                return None;
            }
            bijection.insert_no_overwrite(q.clone(), p.clone()).ok()
        };

        pair(self.start(), other.start(), &mut bijection)?;
        queue.push_back((self.start(), other.start()));

        while let Some((q, p)) = queue.pop_front() {
            for sym in self.alphabet().universe() {
                match (self.successor(q, sym), other.successor(p, sym)) {
                    (None, None) => {}
                    (Some(q_next), Some(p_next)) => {
                        match bijection.get_by_left(q_next) {
                            Some(known) if known == p_next => {}
                            Some(_) => return None,
                            None => {
                                pair(q_next, p_next, &mut bijection)?;
                                queue.push_back((q_next, p_next));
                            }
                        }
                    }
                    _ => return None,
                }
            }
        }

        (bijection.len() == self.size()).then_some(bijection)
    }
}
