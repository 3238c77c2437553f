//! Errors raised by partial operations.
//!
//! Every operation that is undefined for some inputs (the head of an empty
//! list, an out-of-range index, forcing a value out of `Nothing`, ...)
//! returns one of these. Values are rendered into the message with
//! [`Show`] at the point of failure so the error owns no borrowed data.

use thiserror::Error;

use crate::show::Show;

/// Convenience alias used throughout the hask crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when calling a hask operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value is not a valid argument to a function.
    #[error("{value} is not a valid argument to {function}")]
    Type {
        /// The rendered offending value.
        value: String,
        /// The function that rejected it.
        function: &'static str,
    },

    /// Two arguments that must share a type do not.
    #[error("{left} and {right} do not have the same type in {function}")]
    TypeMismatch {
        /// The rendered first argument.
        left: String,
        /// The rendered second argument.
        right: String,
        /// The function that compared them.
        function: &'static str,
    },

    /// A List was required.
    #[error("{value} is not a List in {function}")]
    NotAList {
        /// The rendered offending value.
        value: String,
        /// The function that required a list.
        function: &'static str,
    },

    /// A Tuple was required.
    #[error("{value} is not a Tuple in {function}")]
    NotATuple {
        /// The rendered offending value.
        value: String,
        /// The function that required a tuple.
        function: &'static str,
    },

    /// The operation is undefined on the empty list.
    #[error("{value} is an empty List in {function}")]
    EmptyList {
        /// The rendered list (always `[]`).
        value: String,
        /// The function that was called.
        function: &'static str,
    },

    /// An index fell outside the valid range.
    #[error("index {index} is out of range in {function}")]
    Range {
        /// The offending index.
        index: i64,
        /// The function that was called.
        function: &'static str,
    },

    /// A value was forced out of `Nothing`.
    #[error("{value} is Nothing in {function}")]
    Nothing {
        /// The rendered value (always `Nothing`).
        value: String,
        /// The function that was called.
        function: &'static str,
    },

    /// A caller-supplied callback returned the wrong kind of value.
    #[error("{callback} must return a Bool when called by {caller}")]
    Return {
        /// Description of the callback.
        callback: String,
        /// The function that invoked it.
        caller: &'static str,
    },
}

impl Error {
    /// `value` is not a valid argument to `function`.
    pub fn type_error<T: Show + ?Sized>(value: &T, function: &'static str) -> Self {
        Self::Type {
            value: value.show(),
            function,
        }
        .logged()
    }

    /// `left` and `right` should have the same type but do not.
    pub fn type_mismatch<A, B>(left: &A, right: &B, function: &'static str) -> Self
    where
        A: Show + ?Sized,
        B: Show + ?Sized,
    {
        Self::TypeMismatch {
            left: left.show(),
            right: right.show(),
            function,
        }
        .logged()
    }

    /// `value` is not a List.
    pub fn list_error<T: Show + ?Sized>(value: &T, function: &'static str) -> Self {
        Self::NotAList {
            value: value.show(),
            function,
        }
        .logged()
    }

    /// `value` is not a Tuple.
    pub fn tuple_error<T: Show + ?Sized>(value: &T, function: &'static str) -> Self {
        Self::NotATuple {
            value: value.show(),
            function,
        }
        .logged()
    }

    /// `function` is undefined on the empty list `value`.
    pub fn empty_list<T: Show + ?Sized>(value: &T, function: &'static str) -> Self {
        Self::EmptyList {
            value: value.show(),
            function,
        }
        .logged()
    }

    /// `index` is out of bounds.
    pub fn range_error(index: i64, function: &'static str) -> Self {
        Self::Range { index, function }.logged()
    }

    /// `value` is `Nothing`.
    pub fn nothing<T: Show + ?Sized>(value: &T, function: &'static str) -> Self {
        Self::Nothing {
            value: value.show(),
            function,
        }
        .logged()
    }

    /// `callback` returned something other than a Bool to `caller`.
    pub fn return_error(callback: impl Into<String>, caller: &'static str) -> Self {
        Self::Return {
            callback: callback.into(),
            caller,
        }
        .logged()
    }

    /// The function the error was raised in.
    #[must_use]
    pub fn function(&self) -> &'static str {
        match self {
            Self::Type { function, .. }
            | Self::TypeMismatch { function, .. }
            | Self::NotAList { function, .. }
            | Self::NotATuple { function, .. }
            | Self::EmptyList { function, .. }
            | Self::Range { function, .. }
            | Self::Nothing { function, .. } => function,
            Self::Return { caller, .. } => caller,
        }
    }

    /// A short name for the kind of error, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Type { .. } => "type",
            Self::TypeMismatch { .. } => "type-mismatch",
            Self::NotAList { .. } => "not-a-list",
            Self::NotATuple { .. } => "not-a-tuple",
            Self::EmptyList { .. } => "empty-list",
            Self::Range { .. } => "range",
            Self::Nothing { .. } => "nothing",
            Self::Return { .. } => "return",
        }
    }

    fn logged(self) -> Self {
        tracing::debug!(function = self.function(), kind = self.kind(), "{self}");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::type_error(&5_i64, "cycle").to_string(),
            "5 is not a valid argument to cycle"
        );
        assert_eq!(
            Error::type_mismatch(&1_i64, &'a', "cons").to_string(),
            "1 and 'a' do not have the same type in cons"
        );
        assert_eq!(
            Error::range_error(-1, "index").to_string(),
            "index -1 is out of range in index"
        );
        assert_eq!(
            Error::return_error("predicate", "filter").to_string(),
            "predicate must return a Bool when called by filter"
        );
    }

    #[test]
    fn test_function_and_kind() {
        let err = Error::empty_list(&"[]", "head");
        assert_eq!(err.function(), "head");
        assert_eq!(err.kind(), "empty-list");

        let err = Error::return_error("f", "find");
        assert_eq!(err.function(), "find");
    }
}
