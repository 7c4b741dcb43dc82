pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{DemoProject, demo_project, write_source};
