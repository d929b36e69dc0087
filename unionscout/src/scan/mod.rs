//! Line-oriented scanning: a single compiled pattern tested against every
//! line of every discovered file, driven strictly sequentially.

pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::scan;
pub use matcher::LineMatcher;
pub use processor::FileScanner;
