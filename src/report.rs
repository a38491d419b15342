//! Read-only derived views of allocator state.
//!
//! Reports are diagnostic: use them for budgeting displays and heuristics,
//! not for allocation decisions. In particular `largest_free_region` is an
//! upper envelope (see its docs), so "will this allocation fit" can only be
//! answered by attempting it.

use crate::allocator::Allocator;
use crate::binning::{self, NUM_BINS};
use crate::index::NodeIndex;

/// Aggregate free-space summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageReport {
    /// Sum of all free region lengths, or 0 once the descriptor pool is
    /// down to its reserved slot (nothing is allocatable then anyway).
    pub total_free_space: u32,
    /// Nominal size of the highest non-empty bin: an upper envelope of the
    /// true largest free region. A bin holds blocks in
    /// `[bin_size, next_bin_size)`, so the real largest block may be up to
    /// ~12.5 % smaller than reported.
    pub largest_free_region: u32,
}

/// Per-bin histogram of free regions.
#[derive(Clone, Copy)]
pub struct StorageReportFull {
    pub free_regions: [FreeRegionBucket; NUM_BINS],
}

/// One histogram bucket: the bin's nominal size and how many free regions
/// currently sit in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreeRegionBucket {
    pub size: u32,
    pub count: u32,
}

impl Default for StorageReportFull {
    fn default() -> Self {
        Self {
            free_regions: [FreeRegionBucket::default(); NUM_BINS],
        }
    }
}

impl<I: NodeIndex> Allocator<I> {
    /// Summarize free space.
    #[must_use]
    pub fn storage_report(&self) -> StorageReport {
        let mut total_free_space = 0;
        let mut largest_free_region = 0;

        // Down to the reserved descriptor slot, no request can succeed, so
        // report zero free space rather than unusable bytes.
        if self.free_count > 1 {
            total_free_space = self.free_storage;
            if let Some(bin) = self.bins.highest_free() {
                largest_free_region = binning::bin_to_size(bin);
                debug_assert!(total_free_space >= largest_free_region);
            }
        }

        StorageReport {
            total_free_space,
            largest_free_region,
        }
    }

    /// Count free regions per bin by walking each bin list.
    ///
    /// O(free regions), unlike everything else here; meant for debug
    /// overlays and tests.
    #[must_use]
    pub fn storage_report_full(&self) -> StorageReportFull {
        let mut report = StorageReportFull::default();
        for bin in 0..NUM_BINS {
            let mut count = 0;
            let mut at = self.bin_heads[bin];
            while at != I::NONE {
                at = self.nodes[at.index()].bin_next;
                count += 1;
            }
            report.free_regions[bin] = FreeRegionBucket {
                size: binning::bin_to_size(bin as u32),
                count,
            };
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_allocator_reports_whole_range() {
        let allocator = Allocator::<u32>::new(256 * 1024 * 1024).unwrap();
        let report = allocator.storage_report();
        assert_eq!(report.total_free_space, 256 * 1024 * 1024);
        assert_eq!(report.largest_free_region, 256 * 1024 * 1024);
    }

    #[test]
    fn test_largest_region_is_upper_envelope() {
        let mut allocator = Allocator::<u32>::new(1 << 20).unwrap();

        // Leave a hole that does not land on an exact bin size.
        let a = allocator.allocate(1000).unwrap();
        let _b = allocator.allocate(500).unwrap();
        allocator.free(a);

        let report = allocator.storage_report();
        // The 1000-byte hole files under round_down(1000) = bin for 960,
        // and the trailing region dominates the highest bin.
        assert!(report.largest_free_region <= report.total_free_space);
        assert!(report.total_free_space == (1 << 20) - 500);
    }

    #[test]
    fn test_report_zeroes_when_fully_allocated() {
        let mut allocator = Allocator::<u32>::with_max_allocs(4096, 64).unwrap();
        let _a = allocator.allocate(4096).unwrap();

        let report = allocator.storage_report();
        assert_eq!(report.total_free_space, 0);
        assert_eq!(report.largest_free_region, 0);
    }

    #[test]
    fn test_full_report_counts_bins() {
        let mut allocator = Allocator::<u32>::new(256 * 1024 * 1024).unwrap();

        // Fresh state: exactly one free region, in the whole-range bin.
        let report = allocator.storage_report_full();
        let total: u32 = report.free_regions.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
        let bin = binning::round_down(256 * 1024 * 1024);
        assert_eq!(report.free_regions[bin as usize].count, 1);
        assert_eq!(report.free_regions[bin as usize].size, 256 * 1024 * 1024);

        // Punch two same-size holes; they land in the same bin.
        let a = allocator.allocate(1 << 10).unwrap();
        let b = allocator.allocate(1 << 10).unwrap();
        let _guard = allocator.allocate(1 << 10).unwrap();
        allocator.free(a);
        // b is adjacent to a's hole; freeing it coalesces into one 2 KiB
        // region instead of two 1 KiB ones.
        allocator.free(b);

        let report = allocator.storage_report_full();
        let total: u32 = report.free_regions.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        let coalesced_bin = binning::round_down(2 << 10);
        assert_eq!(report.free_regions[coalesced_bin as usize].count, 1);
    }

    #[test]
    fn test_bucket_sizes_follow_bin_decode() {
        let allocator = Allocator::<u32>::with_max_allocs(1024, 8).unwrap();
        let report = allocator.storage_report_full();
        for (bin, bucket) in report.free_regions.iter().enumerate().take(240) {
            assert_eq!(bucket.size, binning::bin_to_size(bin as u32));
        }
    }
}
