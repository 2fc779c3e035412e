//! The segment-map / address-translation contract.
//!
//! The actual segment table and CP0 system control coprocessor are external
//! collaborators (spec.md §1); this module specifies only the lookup
//! contract `IC` and `DC` call through.

use crate::common::{Cp0Status, Segment};

/// Virtual-address-to-segment translation contract.
#[cfg_attr(test, mockall::automock)]
pub trait SegmentMap {
    /// Looks up the segment covering `address` under the given CP0 status.
    ///
    /// Returns `None` on a miss, which the caller turns into `IADE` (from
    /// `IC`) or `DADE` (from `DC`).
    fn lookup(&self, address: u64, cp0_status: Cp0Status) -> Option<Segment>;
}
