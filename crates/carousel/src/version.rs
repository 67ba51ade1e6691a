//! Mutation versioning shared by both containers.
//!
//! Every structural change (insert, remove, clear) bumps the owning
//! container's version. Detached cursors snapshot the version when created
//! or reset and compare it before every step, so a cursor that outlives a
//! mutation fails on its next step instead of silently walking inconsistent
//! state. Plain integer comparison, nothing more.
//!
//! In-place value replacement (`RingDeque::set`, `IndexMut`) is not a
//! structural change and does not bump the version.

/// Monotonically increasing mutation counter.
///
/// Wraps on overflow; only equality with a snapshot matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Version(u64);

impl Version {
    /// Records a structural mutation.
    #[inline]
    pub(crate) fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
