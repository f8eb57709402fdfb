use derive_more::Display;

/// Which payload an [`Outcome`](crate::Outcome) holds.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Holds a value.
    #[display("success")]
    Success,
    /// Holds an error.
    #[display("failure")]
    Failure,
}

#[cfg(test)]
mod test {
    use super::Kind;

    #[test]
    fn display() {
        assert_eq!(Kind::Success.to_string(), "success");
        assert_eq!(Kind::Failure.to_string(), "failure");
    }
}
