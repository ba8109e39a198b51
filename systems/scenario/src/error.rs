//! Failures raised while turning scenario text into a terrain.

/// Errors that abort scenario loading.
///
/// Every variant tied to a specific line carries its 1-based number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// The scenario contained no lines at all.
    #[error("scenario is empty")]
    EmptyInput,
    /// The line used an unknown tag or the wrong number of fields.
    #[error("line {line}: malformed `{tag}` record")]
    InvalidInput {
        /// Line that failed to parse.
        line: usize,
        /// Leading tag character of the line.
        tag: char,
    },
    /// A second `C` line was found.
    #[error("line {line}: terrain dimensions are declared more than once")]
    DuplicateDimensions {
        /// Line holding the repeated declaration.
        line: usize,
    },
    /// No `C` line was found.
    #[error("scenario does not declare terrain dimensions")]
    MissingDimensions,
    /// Dimensions were zero or an entity lies outside the grid.
    #[error("line {line}: coordinates ({column}, {row}) do not fit the terrain")]
    InvalidCoordinates {
        /// Line holding the offending values.
        line: usize,
        /// Column (or width) value that was rejected.
        column: u32,
        /// Row (or height) value that was rejected.
        row: u32,
    },
    /// An adventurer or mountain was declared on an already blocked cell.
    #[error("line {line}: cell ({column}, {row}) is already occupied")]
    OccupiedCell {
        /// Line holding the conflicting declaration.
        line: usize,
        /// Column of the contested cell.
        column: u32,
        /// Row of the contested cell.
        row: u32,
    },
    /// The direction field is not one of `N`, `E`, `S`, `W`.
    #[error("line {line}: invalid direction `{value}`")]
    InvalidDirection {
        /// Line holding the adventurer.
        line: usize,
        /// Text found in the direction field.
        value: String,
    },
    /// The move script contains a character other than `A`, `G`, `D`.
    #[error("line {line}: invalid move command `{command}` at position {index}")]
    InvalidMoveCommand {
        /// Line holding the adventurer.
        line: usize,
        /// Offending script character.
        command: char,
        /// Zero-based character position within the script.
        index: usize,
    },
    /// A run of digits did not fit into an unsigned 32-bit integer.
    #[error("line {line}: `{value}` is not a valid number")]
    NumericParseFailure {
        /// Line holding the number.
        line: usize,
        /// Digits that failed to convert.
        value: String,
    },
}
