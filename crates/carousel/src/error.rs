use thiserror::Error;

/// Error types for container operations.
///
/// Every error is surfaced synchronously, before any mutation takes place,
/// so a rejected call always leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index was outside the occupied range of the container.
    #[error("index {index} is out of range for a collection of {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container's item count at the time of the call.
        len: usize,
    },
    /// A requested capacity would not hold the items already stored.
    #[error("capacity {requested} is below the current item count {count}")]
    CapacityTooSmall {
        /// The capacity asked for.
        requested: usize,
        /// The container's item count at the time of the call.
        count: usize,
    },
    /// A destination slice was too short for a bulk copy.
    #[error("destination has {len} slots but {needed} are required")]
    DestinationTooSmall {
        /// Slots the copy needs.
        needed: usize,
        /// Slots the destination has.
        len: usize,
    },
    /// A peek or pop was attempted on an empty container.
    #[error("the collection is empty")]
    Empty,
    /// A cursor step observed a container version different from its snapshot.
    #[error("the contents of the collection have changed")]
    Modified,
}
