// crates/valset-epoch/src/lib.rs
//
// valset-epoch: Epoch and period timing for the validator-set test harness.
//
// `EpochSchedule` converts between block numbers and epoch/period
// positions. `EpochClock` pairs a schedule with a chain and mines the
// chain up to the blocks where reward settlement and validator rotation
// happen.

pub mod clock;
pub mod schedule;

pub use clock::{Boundary, EpochClock};
pub use schedule::EpochSchedule;
