//! A `Context` object is the set of parameters that define otherwise
//! ambiguous arithmetical operations: how many fractional places survive
//! construction and rounding, and which two characters stand in for the
//! digit values 62 and 63.
//!
//! There is no process-wide mutable configuration; callers that want
//! non-default behavior pass a context explicitly.

use crate::{BigRadixError, DEFAULT_PRECISION};

/// Characters for digit values 62 and 63 when none are configured
pub const DEFAULT_EXTENDED_DIGITS: [char; 2] = ['+', '/'];

/// Parameters consulted when a number is constructed or rounded
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    precision: usize,
    extended: [char; 2],
}

impl Default for Context {
    fn default() -> Context {
        Context {
            precision: DEFAULT_PRECISION,
            extended: DEFAULT_EXTENDED_DIGITS,
        }
    }
}

impl Context {
    /// A context keeping `precision` fractional places
    pub fn new(precision: usize) -> Context {
        Context {
            precision,
            ..Context::default()
        }
    }

    /// Copy of this context with the given precision
    pub fn with_precision(&self, precision: usize) -> Context {
        Context { precision, ..*self }
    }

    /// Copy of this context with the given characters for digit values
    /// 62 and 63.
    ///
    /// The pair must be two distinct characters, neither of which is
    /// already a digit character for the values 0 through 61.
    pub fn with_extended_digits(&self, extended: [char; 2]) -> Result<Context, BigRadixError> {
        if extended[0] == extended[1] {
            return Err(BigRadixError::Other(
                "extended digit characters cannot be equal".into(),
            ));
        }
        for c in extended {
            if c.is_ascii_alphanumeric() {
                return Err(BigRadixError::Other(format!(
                    "cannot use {:?} as an extended digit: it already names a digit below 62",
                    c
                )));
            }
        }
        Ok(Context { extended, ..*self })
    }

    /// Fractional places kept after construction and rounding
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Characters rendering digit values 62 and 63
    pub fn extended_digits(&self) -> [char; 2] {
        self.extended
    }
}

/// Iteration budget for the convergence-seeking methods (roots,
/// logarithms, the exponential, pi).
///
/// Every method runs until the newest iterate matches either of the two
/// before it (the second comparison guards against 2-cycles caused by
/// rounding), or until `max_iterations` steps have run.  An `exact`
/// policy treats running out of iterations as an error rather than an
/// answer.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Convergence {
    max_iterations: u32,
    exact: bool,
}

impl Convergence {
    /// Run at most `n` iterations and return the current iterate even if
    /// it has not settled
    pub fn iterations(n: u32) -> Convergence {
        Convergence {
            max_iterations: n,
            exact: false,
        }
    }

    /// Iterate to a fixed point, with `ceiling` as a hard limit; hitting
    /// the ceiling yields [`BigRadixError::ConvergenceFailure`]
    pub fn exact(ceiling: u32) -> Convergence {
        Convergence {
            max_iterations: ceiling,
            exact: true,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

impl Default for Convergence {
    fn default() -> Convergence {
        Convergence::iterations(100)
    }
}
