//! Worker Lambda handler and signup processing

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
