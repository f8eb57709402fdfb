use derive_more::IsVariant;

use crate::{Error, Kind, Result};

/// Either a success holding a value, or a failure holding an error.
///
/// Prefer `match` (or the combinators) over [`value`](Outcome::value) and
/// [`error`](Outcome::error): the latter panic on the wrong variant.
///
/// There is no `Default`, and no method takes `&mut self`. Every
/// transformation consumes the outcome and hands back a new one.
#[derive(Clone, Copy, Debug, Eq, Hash, IsVariant, PartialEq)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub enum Outcome<V, E = Error> {
    Success(V),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<V, E> Outcome<V, E> {
    pub const fn success(value: V) -> Self {
        Success(value)
    }

    pub const fn failure(error: E) -> Self {
        Failure(error)
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Success(_) => Kind::Success,
            Failure(_) => Kind::Failure,
        }
    }

    /// The value of a success.
    ///
    /// Panics on a failure: asking for it is a bug in the caller.
    #[track_caller]
    pub fn value(self) -> V {
        match self {
            Success(value) => value,
            Failure(_) => {
                error!("value() called on a failure outcome");
                panic!("called `Outcome::value()` on a failure");
            }
        }
    }

    /// The error of a failure.
    ///
    /// Panics on a success: asking for it is a bug in the caller.
    #[track_caller]
    pub fn error(self) -> E {
        match self {
            Failure(error) => error,
            Success(_) => {
                error!("error() called on a success outcome");
                panic!("called `Outcome::error()` on a success");
            }
        }
    }

    /// Like [`value`](Outcome::value), with misuse reported as an [`Error`].
    pub fn try_value(self) -> Result<V> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => {
                trace!("try_value() on a failure outcome");
                Err(Error::wrong_variant("value of a failure"))
            }
        }
    }

    /// Like [`error`](Outcome::error), with misuse reported as an [`Error`].
    pub fn try_error(self) -> Result<E> {
        match self {
            Failure(error) => Ok(error),
            Success(_) => {
                trace!("try_error() on a success outcome");
                Err(Error::wrong_variant("error of a success"))
            }
        }
    }

    pub fn success_value(self) -> Option<V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    pub fn failure_error(self) -> Option<E> {
        match self {
            Failure(error) => Some(error),
            Success(_) => None,
        }
    }

    /// Borrow the payload without giving up the outcome.
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    pub fn into_result(self) -> core::result::Result<V, E> {
        self.into()
    }

    /// Transform the value of a success. A failure passes through and `f` is not called.
    pub fn map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the error of a failure. A success passes through and `f` is not called.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Chain a fallible step on the value of a success; its outcome replaces this one.
    ///
    /// A failure short-circuits: it is returned as is and `f` is not called.
    pub fn flat_map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Chain a step on the error of a failure; its outcome replaces this one.
    ///
    /// This is the only combinator through which a failure can turn into a success.
    pub fn flat_map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Eliminate the outcome; exactly one of the closures runs.
    pub fn fold<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(V) -> T,
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        self.fold(|value| value, f)
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    pub fn flatten(self) -> Outcome<V, E> {
        self.flat_map(|inner| inner)
    }
}

impl<V, E> From<core::result::Result<V, E>> for Outcome<V, E> {
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for core::result::Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
