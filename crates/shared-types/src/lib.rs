pub mod case;
pub mod report;
pub mod stats;
pub mod status;
pub mod team;

// Re-export all domain types
pub use case::*;
pub use report::*;
pub use stats::*;
pub use status::*;
pub use team::*;
