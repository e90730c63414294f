use thiserror::Error;

/// Errors that are reported when the components handed to [`crate::Dfa::new`] do not form
/// a well-formed deterministic automaton. The offending states and symbols are rendered
/// through [`crate::Show`], which keeps the error independent of the state and symbol types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAutomaton {
    /// The designated start state is not among the declared states.
    #[error("start state {0} is not a declared state")]
    UnknownStart(String),
    /// An accepting state is not among the declared states.
    #[error("accepting state {0} is not a declared state")]
    UnknownAcceptingState(String),
    /// A transition leaves from a state that was not declared.
    #[error("transition ({state}, {symbol}) leaves from an undeclared state")]
    UnknownTransitionSource {
        /// The source state of the transition.
        state: String,
        /// The symbol of the transition.
        symbol: String,
    },
    /// A transition leads to a state that was not declared.
    #[error("transition ({state}, {symbol}) leads to undeclared state {target}")]
    UnknownTransitionTarget {
        /// The source state of the transition.
        state: String,
        /// The symbol of the transition.
        symbol: String,
        /// The undeclared target.
        target: String,
    },
    /// A transition is labeled with a symbol that is not part of the alphabet.
    #[error("transition ({state}, {symbol}) uses a symbol outside of the alphabet")]
    UnknownSymbol {
        /// The source state of the transition.
        state: String,
        /// The unknown symbol.
        symbol: String,
    },
    /// The same state and symbol were given two different targets.
    #[error("transition ({state}, {symbol}) is not deterministic, it leads to {first} and {second}")]
    ConflictingTransition {
        /// The source state of the transition.
        state: String,
        /// The symbol of the transition.
        symbol: String,
        /// The target that was given first.
        first: String,
        /// The target that was given afterwards.
        second: String,
    },
}
