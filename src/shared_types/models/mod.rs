mod usage_summary;

pub use usage_summary::*;
