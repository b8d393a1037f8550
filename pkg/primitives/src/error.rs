/// An error parsing a [`Digest`] or [`Address`] from external input
///
/// [`Digest`]: crate::Digest
/// [`Address`]: crate::Address
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input was not valid hex
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The input decoded to the wrong number of bytes
    #[error("expected {expected} bytes, got {got}")]
    Length {
        /// The required width
        expected: usize,
        /// The width actually supplied
        got: usize,
    },
}
