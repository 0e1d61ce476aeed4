use tetonor_core::PairId;

/// Configuration errors raised before any puzzle is built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// `rows * cols` is odd, so cells cannot be split into add/multiply halves.
    #[display("grid dimensions {rows}x{cols} must result in an even number of cells")]
    OddCellCount {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// `rows * cols` overflows `usize`.
    #[display("grid dimensions {rows}x{cols} are too large")]
    GridTooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// `rows * cols` is zero.
    #[display("grid must contain at least one pair of cells")]
    EmptyGrid,
    /// `min_value > max_value`.
    #[display("value range {min}..={max} is empty")]
    InvalidValueRange {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
    /// `max * max` does not fit the target type.
    #[display("values up to {max} overflow multiplication targets")]
    ValueOverflow {
        /// Requested maximum.
        max: u32,
    },
    /// Fewer pairs were supplied than the grid needs.
    #[display("not enough pairs: need {required}, have {available}")]
    NotEnoughPairs {
        /// Pairs needed (`rows * cols / 2`).
        required: usize,
        /// Pairs supplied.
        available: usize,
    },
    /// A pair's sum or product cannot be computed.
    #[display("{pair} has a hidden value without a shadow copy or overflows its targets")]
    UnresolvablePair {
        /// The offending pair.
        pair: PairId,
    },
}
