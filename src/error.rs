use thiserror::Error;

/// The error type.
///
/// Parsing and the default-taking accessors never fail; only the strict
/// accessors and the process argument reader return this.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Environment errors
    //------------------------------
    /// A process argument was not valid UTF-8.
    #[error("argument {index} is not valid unicode: {lossy:?}")]
    InvalidUnicode {
        /// Position of the argument (0 is the program name).
        index: usize,
        /// The argument with invalid sequences replaced.
        lossy: String,
    },

    //------------------------------
    // Strict accessor errors
    //------------------------------
    /// A flag value could not be read as an integer.
    #[error("flag {name:?} has non-integer value {value:?}")]
    InvalidInt {
        /// Canonical flag name.
        name: String,
        /// The stored value.
        value: String,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
