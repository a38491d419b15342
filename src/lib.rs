//! Hard-realtime O(1) offset allocator.
//!
//! `carve` sub-allocates an abstract contiguous range `[0, size)` of 32-bit
//! byte offsets. It owns no memory and performs no syscalls: callers bind
//! the returned offsets to whatever backing they manage themselves, such as
//! a GPU buffer or a pre-mapped arena.
//!
//! Allocate and free are wait-free constant time. Sizes quantize into 256
//! piecewise-logarithmic bins (at most 12.5 % class overhead), a two-level
//! bitmap finds the smallest sufficient bin in a few bit operations, and
//! freed regions coalesce with both neighbors through an address-ordered
//! link chain.
//!
//! ```
//! use carve::Allocator;
//!
//! let mut allocator = Allocator::<u32>::new(256 * 1024 * 1024)?;
//! let a = allocator.allocate(1337)?;
//! assert_eq!(a.offset, 0);
//! allocator.free(a);
//! # Ok::<(), carve::AllocError>(())
//! ```

pub(crate) mod allocator;
pub(crate) mod binning;
pub(crate) mod index;
pub(crate) mod report;

// cross-module scenario tests
mod integration;

// allocator core
pub use allocator::{AllocError, Allocation, Allocator, DEFAULT_MAX_ALLOCS};

// index width profiles
pub use index::NodeIndex;

// size classes
pub use binning::NUM_BINS;

// reporting
pub use report::{FreeRegionBucket, StorageReport, StorageReportFull};

/// 16-bit-index profile: half the per-node metadata, pool capped at 65535
/// descriptors.
pub type CompactAllocator = Allocator<u16>;
