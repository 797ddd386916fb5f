//! API Lambda handler and response construction

pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::handler;
