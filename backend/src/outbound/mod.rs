//! Outbound adapters implementing the directory ports.
//!
//! Adapters are thin translators between domain types and whatever holds
//! the records. They contain no query logic of their own.
//!
//! - **memory**: the fixed, process-lifetime store seeded at startup.

pub mod memory;
