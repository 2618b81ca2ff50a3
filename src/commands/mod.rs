// Command handlers module
pub mod report;

// Re-exports for cleaner imports
pub use report::execute as report;
