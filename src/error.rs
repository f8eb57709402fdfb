use derive_more::Display;

/// Structured error descriptor: a domain, a code within it, and a message.
///
/// This is the default failure payload of [`Outcome`](crate::Outcome), but any
/// type can take its place.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{domain} ({code}): {message}")]
pub struct Error {
    domain: &'static str,
    code: i64,
    message: &'static str,
}

impl Error {
    /// Domain of the errors raised by this crate itself.
    pub const DOMAIN: &'static str = "outcome";

    /// A panicking accessor was asked for the payload the outcome does not hold.
    pub const WRONG_VARIANT: i64 = 1;

    pub const fn new(domain: &'static str, code: i64, message: &'static str) -> Self {
        Self { domain, code, message }
    }

    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    pub const fn code(&self) -> i64 {
        self.code
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Same domain and message, different code.
    pub const fn with_code(self, code: i64) -> Self {
        Self { code, ..self }
    }

    /// Same domain and code, different message.
    pub const fn with_message(self, message: &'static str) -> Self {
        Self { message, ..self }
    }

    pub(crate) const fn wrong_variant(message: &'static str) -> Self {
        Self::new(Self::DOMAIN, Self::WRONG_VARIANT, message)
    }
}

impl core::error::Error for Error {}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let error = Error::new("http", 404, "not found");
        assert_eq!(error.to_string(), "http (404): not found");
    }

    #[test]
    fn derivations_keep_the_rest() {
        let error = Error::new("io", 2, "no such file");

        let recoded = error.with_code(3);
        assert_eq!(recoded.domain(), "io");
        assert_eq!(recoded.code(), 3);
        assert_eq!(recoded.message(), "no such file");

        let reworded = error.with_message("gone");
        assert_eq!(reworded.code(), 2);
        assert_eq!(reworded.message(), "gone");

        // original untouched
        assert_eq!(error, Error::new("io", 2, "no such file"));
    }

    #[test]
    fn wrong_variant_is_in_crate_domain() {
        let error = Error::wrong_variant("value of failure");
        assert_eq!(error.domain(), Error::DOMAIN);
        assert_eq!(error.code(), Error::WRONG_VARIANT);
    }
}
