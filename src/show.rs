use itertools::Itertools;

/// Helper trait which is used to display states and symbols of an automaton.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state that should be
    /// for example `q0`, for a symbol something like `a`. This is mainly used for
    /// debugging and for rendering transition tables.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be
    /// `{q0, q1, q2}`. The elements are shown in the order the iterator produces them.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for u32 {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(|x| x.show()).join(""))
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

#[cfg(test)]
mod tests {
    use super::Show;

    #[test]
    fn show_words_and_collections() {
        assert_eq!(vec!['a', 'b', 'a'].show(), "\"aba\"");
        assert_eq!(Vec::<char>::new().show(), "\"\"");
        assert_eq!(("q0", 'a').show(), "(q0, a)");
        assert_eq!(u32::show_collection(&[1, 2, 3]), "{1, 2, 3}");
        assert_eq!(String::show_collection(&[]), "{}");
    }
}
