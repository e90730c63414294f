use std::collections::VecDeque;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{math::Partition, prelude::*};

/// The state of a minimized automaton. Each one stands for a whole block of equivalent
/// states of the automaton that was minimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalState(usize);

impl CanonicalState {
    /// Creates the canonical state with the given index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of the canonical state.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Show for CanonicalState {
    fn show(&self) -> String {
        format!("c{}", self.0)
    }
}

impl From<usize> for CanonicalState {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Assigns a number to every block of `partition`. The blocks that can be reached from the
/// block of the start state are numbered in breadth-first order, where successors are
/// visited in alphabet order. All remaining blocks come afterwards, ordered by their least
/// element. The returned vector maps the position of a block to its number.
fn block_numbering<Q: StateId, S: Symbol>(
    dfa: &Dfa<Q, S>,
    partition: &Partition<Q>,
    lookup: &Map<Q, usize>,
) -> Vec<usize> {
    let block_of = |q: &Q| *lookup.get(q).expect("partition must cover all states");

    let mut numbering = vec![None; partition.size()];
    let mut next = 0;
    let mut queue = VecDeque::from([block_of(dfa.start())]);
    numbering[block_of(dfa.start())] = Some(0);
    next += 1;

    while let Some(block) = queue.pop_front() {
        let representative = partition[block]
            .first()
            .expect("blocks of a partition are never empty");
        for sym in dfa.alphabet().universe() {
            if let Some(p) = dfa.successor(representative, sym) {
                let target = block_of(p);
                if numbering[target].is_none() {
                    numbering[target] = Some(next);
                    next += 1;
                    queue.push_back(target);
                }
            }
        }
    }

    for block in (0..partition.size())
        .filter(|&i| numbering[i].is_none())
        .sorted_by(|&i, &j| partition[i].first().cmp(&partition[j].first()))
        .collect_vec()
    {
        numbering[block] = Some(next);
        next += 1;
    }

    numbering
        .into_iter()
        .map(|n| n.expect("every block has been numbered"))
        .collect()
}

/// Collapses every block of `partition` into a single [`CanonicalState`]. A transition of
/// `dfa` from `q` on `a` to `p` becomes a transition from the canonical state of `q` on `a`
/// to the canonical state of `p`, the start state is the canonical state of the old start
/// state, and a canonical state is accepting if its block contains an accepting state.
///
/// The partition has to cover the states of `dfa` and must be a congruence, meaning states
/// in the same block have transitions into the same blocks. This is the case for the
/// partition computed by [`super::partition_refinement::refine`]. If every state of `dfa`
/// is reachable from the start state, the numbering of the canonical states only depends on
/// the structure of the quotient, so two isomorphic inputs produce identical outputs. Blocks
/// that cannot be reached are ordered by their least element and thus depend on the names of
/// the original states.
pub fn canonicalize<Q: StateId, S: Symbol>(
    dfa: &Dfa<Q, S>,
    partition: &Partition<Q>,
) -> Dfa<CanonicalState, S> {
    let lookup = partition.block_lookup();
    let numbering = block_numbering(dfa, partition, &lookup);
    let canonical = |q: &Q| {
        CanonicalState(numbering[*lookup.get(q).expect("partition must cover all states")])
    };

    let mut transitions: Map<(CanonicalState, S), CanonicalState> = Map::default();
    for ((q, a), p) in dfa.transitions() {
        let target = canonical(p);
        if let Some(previous) = transitions.insert((canonical(q), a.clone()), target) {
            debug_assert_eq!(
                previous, target,
                "partition is not a congruence, states of one block disagree on {}",
                a.show()
            );
        }
    }

    let states: Set<CanonicalState> = (0..partition.size()).map(CanonicalState).collect();
    let accepting: Set<CanonicalState> = dfa.accepting().iter().map(canonical).collect();
    let start = canonical(dfa.start());

    trace!(
        "canonical states {}",
        partition
            .iter()
            .map(|block| format!(
                "{} -> {}",
                Q::show_collection(block),
                canonical(block.first().expect("blocks are never empty")).show()
            ))
            .join(", ")
    );
    debug!(
        states = states.len(),
        transitions = transitions.len(),
        "collapsed partition into canonical states"
    );

    Dfa::from_parts_unchecked(
        states,
        dfa.alphabet().clone(),
        transitions,
        start,
        accepting,
    )
}
