pub mod collector;
pub mod cpu;
pub mod memory;
pub mod os;
pub mod storage;
pub mod types;

pub use collector::{MetricsSource, SysinfoSource};
pub use types::*;
