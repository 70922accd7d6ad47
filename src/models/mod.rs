mod exclusion;

pub use exclusion::{ExclusionRow, ExclusionType, Pathogen, PointExclusion, StateExclusion};
