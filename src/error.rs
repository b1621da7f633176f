use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end a run. All variants are terminal: nothing is
/// retried, and the simulation loop tears down both the grid and the
/// display service before surfacing the first error it saw.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid dimensions must be nonzero multiples of 8 so that rows pack
    /// exactly into bytes, and their product must fit in memory.
    #[error("grid dimensions {width}x{height} must be nonzero multiples of 8")]
    InvalidDimensions { width: usize, height: usize },

    /// A generation buffer could not be allocated.
    #[error("failed to allocate a {bytes}-byte generation buffer")]
    Allocation { bytes: usize },

    /// The display service could not establish a presentable surface.
    #[error("display init failed: {reason}")]
    DisplayInit { reason: String },

    /// The display service failed while uploading or presenting a frame.
    #[error("display present failed: {reason}")]
    DisplayPresent { reason: String },
}
