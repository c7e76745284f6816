// Topic model views — the read-only seam to the estimation engine.

pub mod fixture;
pub mod traits;
