//! Minimization of [`Dfa`]s through partition refinement. The [`partition_refinement`]
//! module computes the classes of equivalent states, [`canonical`] collapses each class into
//! a single fresh state.

/// Collapsing classes of equivalent states into canonical states.
pub mod canonical;
/// Moore's partition refinement algorithm.
pub mod partition_refinement;

use crate::{math::Partition, prelude::*};

impl<Q: StateId, S: Symbol> Dfa<Q, S> {
    /// Computes the partition of the states into classes of equivalent states with Moore's
    /// partition refinement algorithm, see [`partition_refinement::refine`].
    pub fn moore_partition(&self) -> Partition<Q> {
        partition_refinement::refine(self)
    }

    /// Returns the minimal automaton that is obtained by merging all equivalent states of
    /// `self`. Every state of the result is a [`CanonicalState`] standing for one class of
    /// [`Dfa::moore_partition`]. Unreachable states are kept, call [`Dfa::prune`] first or
    /// use [`Dfa::canonical_form`] to get rid of them.
    ///
    /// # Example
    /// ```
    /// use dfa_canon::prelude::*;
    ///
    /// // 1 and 2 are both accepting and lead back to 0 on every symbol
    /// let dfa = DfaBuilder::default()
    ///     .with_edges([(0u32, 'a', 1), (0, 'b', 2), (1, 'a', 0), (1, 'b', 0), (2, 'a', 0), (2, 'b', 0)])
    ///     .with_accepting([1, 2])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// let min = dfa.clone().minimize();
    /// assert_eq!(min.size(), 2);
    /// assert!(min.equivalent(&dfa));
    /// ```
    pub fn minimize(self) -> Dfa<CanonicalState, S> {
        let partition = self.moore_partition();
        canonical::canonicalize(&self, &partition)
    }

    /// Runs the whole pipeline: first all unreachable states are removed, then the
    /// remaining automaton is minimized. The numbering of the resulting states is fixed, so
    /// isomorphic inputs yield identical results.
    ///
    /// A missing transition is treated as a class of its own, different from a transition
    /// into a rejecting dead state. For complete automata the result is the unique minimal
    /// automaton for the language of `self`. A partial automaton and its completion with a
    /// dead state have different canonical forms, even though they accept the same words.
    pub fn canonical_form(mut self) -> Dfa<CanonicalState, S> {
        self.prune();
        self.minimize()
    }
}

#[cfg(test)]
mod tests {
    use crate::{automaton::tests::four_state_dfa, prelude::*};

    /// Enumerates all words over `alphabet` of length at most `length`.
    fn words_up_to<S: Symbol>(alphabet: &Alphabet<S>, length: usize) -> Vec<Vec<S>> {
        let mut layer: Vec<Vec<S>> = vec![vec![]];
        let mut words = layer.clone();
        for _ in 0..length {
            layer = layer
                .iter()
                .flat_map(|word| {
                    alphabet.universe().map(move |sym| {
                        let mut longer = word.clone();
                        longer.push(sym.clone());
                        longer
                    })
                })
                .collect();
            words.extend(layer.iter().cloned());
        }
        words
    }

    #[test_log::test]
    fn four_state_example_stays_the_same() {
        let dfa = four_state_dfa();
        let mut pruned = dfa.clone();
        pruned.prune();
        assert_eq!(pruned, dfa);

        let min = pruned.minimize();
        assert_eq!(min.size(), 4);
        assert_eq!(min.transition_count(), 8);
        assert!(min.isomorphism(&dfa).is_some());
    }

    #[test_log::test]
    fn identical_states_are_merged() {
        let dfa = DfaBuilder::default()
            .with_edges([
                ("q0", '0', "q1"),
                ("q0", '1', "q2"),
                ("q1", '0', "q3"),
                ("q1", '1', "q3"),
                ("q2", '0', "q3"),
                ("q2", '1', "q3"),
                ("q3", '0', "q3"),
                ("q3", '1', "q3"),
            ])
            .with_accepting(["q3"])
            .into_dfa("q0")
            .unwrap();
        let min = dfa.clone().canonical_form();
        assert_eq!(min.size(), 3);
        assert!(min.equivalent(&dfa));
        assert_eq!(
            min.run("0".chars()),
            min.run("1".chars()),
            "q1 and q2 must collapse into the same state"
        );
    }

    #[test]
    fn unreachable_states_are_kept_by_minimize() {
        let dfa = DfaBuilder::default()
            .with_edges([(0u32, 'a', 0), (1, 'a', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.clone().minimize().size(), 2);
        assert_eq!(dfa.canonical_form().size(), 1);
    }

    #[test]
    fn minimizing_twice_keeps_unreachable_blocks_in_place() {
        let dfa = DfaBuilder::default()
            .with_edges([(4u32, 'a', 4), (1, 'a', 1), (3, 'a', 4), (2, 'a', 2)])
            .with_accepting([1, 2])
            .into_dfa(4)
            .unwrap();
        let once = dfa.minimize();
        // 1 and 2 merge, 3 is equivalent to the start state 4
        assert_eq!(once.size(), 2);
        let twice = once.clone().minimize();
        assert_eq!(once, twice);

        let dfa = DfaBuilder::default()
            .with_edges([(0u32, 'a', 0), (1, 'a', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        let once = dfa.minimize();
        assert!(once.is_accepting(&CanonicalState::new(1)));
        assert_eq!(once.clone().minimize(), once);
    }

    #[test]
    fn missing_transitions_are_not_merged_with_dead_states() {
        let partial = DfaBuilder::default()
            .with_symbols(['a', 'b'])
            .with_edges([(0u32, 'a', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        let complete = DfaBuilder::default()
            .with_edges([
                (0u32, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 2),
                (1, 'b', 2),
                (2, 'a', 2),
                (2, 'b', 2),
            ])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        assert!(partial.equivalent(&complete));

        let partial_min = partial.canonical_form();
        let complete_min = complete.canonical_form();
        assert_eq!(partial_min.size(), 2);
        assert_eq!(complete_min.size(), 3);
        assert_ne!(partial_min, complete_min);
    }

    #[test]
    fn word_enumeration() {
        let words = words_up_to(&Alphabet::of_size(2), 2);
        assert_eq!(words.len(), 1 + 2 + 4);
        assert!(words.contains(&vec![]));
        assert!(words.contains(&vec!['b', 'a']));
    }

    #[test]
    fn language_is_preserved_on_all_short_words() {
        let dfa = four_state_dfa();
        let min = dfa.clone().canonical_form();
        for word in words_up_to(dfa.alphabet(), 8) {
            assert_eq!(
                dfa.accepts(&word),
                min.accepts(&word),
                "verdicts differ on {}",
                word.show()
            );
        }
    }

    #[cfg(feature = "random")]
    mod random {
        use super::words_up_to;
        use crate::prelude::*;

        fn random_dfas(density: f64) -> impl Iterator<Item = Dfa<u32, char>> {
            (0..60).map(move |seed| {
                RandomDfa::new(9, 2)
                    .with_transition_density(density)
                    .with_accepting_density(0.4)
                    .with_seed(seed)
                    .generate()
            })
        }

        #[test]
        fn language_preservation() {
            for dfa in random_dfas(0.85) {
                let min = dfa.clone().canonical_form();
                assert!(min.size() <= dfa.size());
                for word in words_up_to(dfa.alphabet(), 7) {
                    assert_eq!(dfa.accepts(&word), min.accepts(&word));
                }
                assert_eq!(dfa.separating_word(&min), None);
            }
        }

        #[test]
        fn minimization_is_idempotent() {
            for density in [0.6, 1.0] {
                for dfa in random_dfas(density) {
                    let once = dfa.canonical_form();
                    let twice = once.clone().minimize();
                    assert_eq!(once, twice);
                    assert!(once.isomorphism(&twice).is_some());
                }
            }
        }

        #[test]
        fn complete_minimal_automata_have_no_equivalent_states() {
            for dfa in random_dfas(1.0) {
                assert!(dfa.is_complete());
                let min = dfa.canonical_form();
                let states = min.sorted_states().cloned().collect::<Vec<_>>();
                for (i, p) in states.iter().enumerate() {
                    for q in &states[i + 1..] {
                        let witness = min.separate(p, q).unwrap_or_else(|| {
                            panic!("{} and {} are not separated", p.show(), q.show())
                        });
                        let from_p = min.run_from(p, &witness).expect("complete automaton");
                        let from_q = min.run_from(q, &witness).expect("complete automaton");
                        assert_ne!(min.is_accepting(from_p), min.is_accepting(from_q));
                    }
                }
            }
        }

        #[test]
        fn minimal_size_matches_number_of_classes() {
            for dfa in random_dfas(1.0) {
                let mut pruned = dfa.clone();
                pruned.prune();
                // count the classes of language-equivalent states by pairwise comparison
                let states = pruned.sorted_states().cloned().collect::<Vec<_>>();
                let mut representatives: Vec<u32> = vec![];
                for q in states {
                    if representatives
                        .iter()
                        .all(|r| pruned.separate(r, &q).is_some())
                    {
                        representatives.push(q);
                    }
                }
                assert_eq!(dfa.canonical_form().size(), representatives.len());
            }
        }
    }
}
