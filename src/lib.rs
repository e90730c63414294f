//! Library for building and canonicalizing deterministic finite automata in Rust.
//!
//! A deterministic finite automaton ([`Dfa`]) consists of a finite set of states, an alphabet, a partial transition function that assigns to a pair of state and symbol at most one target state, a designated start state and a set of accepting states. States and symbols are opaque: any type that can be compared, ordered, hashed and shown (see [`Show`]) can be used. A missing transition is a legitimate part of the automaton, a word whose run hits it is rejected.
//!
//! The central operation of the crate is the canonicalization of an automaton, which happens in two phases:
//! - [`Dfa::prune`] removes all states that cannot be reached from the start state, together with their transitions. This mutates the automaton in place.
//! - [`Dfa::minimize`] computes the coarsest partition of the states into classes of equivalent states through Moore's partition refinement (see [`minimization::partition_refinement`]) and then collapses every class into a single [`CanonicalState`] (see [`minimization::canonical`]). As the states of the result are of a different type, this consumes the automaton and returns a new one.
//!
//! [`Dfa::canonical_form`] runs both phases. The states of the result are numbered in breadth-first order from the start state, so isomorphic automata end up with identical canonical forms. Since a missing transition counts as a class of its own, two complete automata for the same language share their canonical form, while a partial automaton and its completion with a dead state do not.
//!
//! Further, the crate offers means to compare automata, namely searching for a separating word of two automata or two states ([`Dfa::separating_word`], [`Dfa::separate`]) as well as finding isomorphisms ([`Dfa::isomorphism`]). With the `random` feature, random automata can be generated through [`random::RandomDfa`].
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_canon::prelude::*;` should be enough to use the package.
pub mod prelude {
    #[cfg(feature = "random")]
    pub use super::random::RandomDfa;
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{Dfa, StateId},
        builder::DfaBuilder,
        error::MalformedAutomaton,
        math::{self, Map, Set},
        minimization::canonical::CanonicalState,
        reachability::{MinimalRepresentatives, ReachableStates},
        Show,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

mod show;
pub use show::Show;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Defines the deterministic finite automaton and its basic operations.
pub mod automaton;
pub use automaton::Dfa;

/// Helper for the construction of automata.
pub mod builder;

/// Errors that occur when constructing an automaton from malformed components.
pub mod error;
pub use error::MalformedAutomaton;

/// Reachability of states and the removal of unreachable states.
pub mod reachability;

pub mod minimization;
pub use minimization::canonical::CanonicalState;

/// Checks for language equivalence and isomorphism of automata.
pub mod equivalence;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;
