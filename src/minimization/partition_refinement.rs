use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::{math::Partition, prelude::*};

/// The transition behaviour of a state with respect to a partition. The entry at position `i`
/// corresponds to the `i`-th symbol of the alphabet and holds the index of the block which
/// contains the successor on that symbol. States without a transition on the symbol have
/// `None` there, which is different from every block.
pub type Signature = Vec<Option<usize>>;

/// Splits the states into the accepting ones and the rejecting ones. If all states are
/// accepting (or none of them is), the partition consists of a single block.
pub fn initial_partition<Q: StateId, S: Symbol>(dfa: &Dfa<Q, S>) -> Partition<Q> {
    let (accepting, rejecting): (Vec<Q>, Vec<Q>) = dfa
        .states()
        .iter()
        .cloned()
        .partition(|q| dfa.is_accepting(q));
    Partition::new([accepting, rejecting])
}

/// Computes the [`Signature`] of `state`, where `lookup` sends every state to the index of
/// its block in the current partition.
pub fn signature<Q: StateId, S: Symbol>(
    dfa: &Dfa<Q, S>,
    state: &Q,
    lookup: &Map<Q, usize>,
) -> Signature {
    dfa.alphabet()
        .universe()
        .map(|sym| {
            dfa.successor(state, sym)
                .map(|p| *lookup.get(p).expect("every state must belong to a block"))
        })
        .collect()
}

fn split_by_lookup<Q: StateId, S: Symbol>(
    dfa: &Dfa<Q, S>,
    block: &BTreeSet<Q>,
    lookup: &Map<Q, usize>,
) -> Vec<BTreeSet<Q>> {
    let mut groups: BTreeMap<Signature, BTreeSet<Q>> = BTreeMap::new();
    for q in block {
        groups
            .entry(signature(dfa, q, lookup))
            .or_default()
            .insert(q.clone());
    }
    groups.into_values().collect()
}

/// Splits `block` into groups of states that agree on the block of `partition` that each
/// symbol leads to. Two states end up in the same group if and only if they have the same
/// [`Signature`]. The returned groups are non-empty and partition `block`.
pub fn split<Q: StateId, S: Symbol>(
    dfa: &Dfa<Q, S>,
    block: &BTreeSet<Q>,
    partition: &Partition<Q>,
) -> Vec<BTreeSet<Q>> {
    split_by_lookup(dfa, block, &partition.block_lookup())
}

/// Computes the coarsest partition of the states of `dfa` which separates accepting from
/// rejecting states and is stable under [`split`]. This is Moore's algorithm: starting from
/// the [`initial_partition`], every block is split in each round until a round leaves the
/// partition unchanged. As blocks are only ever split, this takes at most as many rounds as
/// there are states.
pub fn refine<Q: StateId, S: Symbol>(dfa: &Dfa<Q, S>) -> Partition<Q> {
    let mut partition = initial_partition(dfa);
    let mut rounds = 0;

    loop {
        rounds += 1;
        let lookup = partition.block_lookup();
        let refined: Partition<Q> = partition
            .iter()
            .flat_map(|block| split_by_lookup(dfa, block, &lookup))
            .collect::<Vec<_>>()
            .into();
        trace!(
            round = rounds,
            before = partition.size(),
            after = refined.size(),
            "refinement round"
        );
        if refined == partition {
            break;
        }
        partition = refined;
    }

    debug!(
        rounds,
        classes = partition.size(),
        states = dfa.size(),
        "partition refinement reached fixpoint"
    );
    debug_assert!(partition.is_partition_of(dfa.states()));
    partition
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::automaton::tests::four_state_dfa;

    fn blocks<Q: Ord + Clone + std::hash::Hash>(partition: &Partition<Q>) -> BTreeSet<BTreeSet<Q>> {
        partition.iter().cloned().collect()
    }

    #[test]
    fn initial_partition_omits_empty_blocks() {
        let all_rejecting = DfaBuilder::default()
            .with_edges([(0u32, 'a', 1), (1, 'a', 0)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(initial_partition(&all_rejecting).size(), 1);

        let mixed = DfaBuilder::default()
            .with_edges([(0u32, 'a', 1), (1, 'a', 0)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        assert_eq!(
            initial_partition(&mixed),
            Partition::new([vec![0], vec![1]])
        );
    }

    #[test_log::test]
    fn four_state_example_is_already_minimal() {
        let dfa = four_state_dfa();
        let partition = refine(&dfa);
        assert_eq!(partition.size(), 4);
        assert!(partition.is_partition_of(dfa.states()));
        assert!(partition.iter().all(|block| block.len() == 1));
    }

    #[test_log::test]
    fn equivalent_states_share_a_block() {
        // 1 and 2 are both accepting and loop back to 0 on every symbol
        let dfa = DfaBuilder::default()
            .with_edges([
                (0u32, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 0),
                (1, 'b', 0),
                (2, 'a', 0),
                (2, 'b', 0),
            ])
            .with_accepting([1, 2])
            .into_dfa(0)
            .unwrap();
        let partition = refine(&dfa);
        assert_eq!(
            blocks(&partition),
            blocks(&Partition::new([vec![0], vec![1, 2]]))
        );
    }

    #[test]
    fn missing_transitions_form_their_own_class() {
        // 0 and 1 agree on acceptance, but only 1 has a transition on `b`
        let dfa = DfaBuilder::default()
            .with_edges([(0u32, 'a', 2), (1, 'a', 2), (1, 'b', 2), (2, 'a', 2), (2, 'b', 2)])
            .with_accepting([2])
            .into_dfa(0)
            .unwrap();
        let lookup = initial_partition(&dfa).block_lookup();
        let accepting_block = lookup[&2];
        assert_eq!(signature(&dfa, &0, &lookup), vec![Some(accepting_block), None]);
        assert_eq!(
            signature(&dfa, &1, &lookup),
            vec![Some(accepting_block), Some(accepting_block)]
        );

        let partition = refine(&dfa);
        assert_eq!(partition.size(), 3);
    }

    #[test]
    fn split_groups_by_signature() {
        let dfa = DfaBuilder::default()
            .with_edges([
                (0u32, 'a', 3),
                (1, 'a', 3),
                (2, 'a', 0),
                (3, 'a', 3),
            ])
            .with_accepting([3])
            .into_dfa(0)
            .unwrap();
        let partition = initial_partition(&dfa);
        let rejecting: BTreeSet<u32> = [0, 1, 2].into_iter().collect();
        let groups = split(&dfa, &rejecting, &partition);
        assert_eq!(groups.len(), 2);
        assert!(groups.contains(&[0, 1].into_iter().collect()));
        assert!(groups.contains(&[2].into_iter().collect()));
        assert!(groups.iter().all(|group| !group.is_empty()));
    }

    #[test]
    #[cfg(feature = "random")]
    fn refinement_yields_valid_partitions() {
        for seed in 0..100 {
            let dfa = RandomDfa::new(10, 3)
                .with_transition_density(0.8)
                .with_seed(seed)
                .generate();
            let partition = refine(&dfa);
            assert!(partition.is_partition_of(dfa.states()));

            // the fixpoint is stable under one more round of splitting
            for block in &partition {
                assert_eq!(split(&dfa, block, &partition).len(), 1);
            }
        }
    }
}
