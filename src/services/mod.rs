//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain entities and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod user_service;

pub use user_service::{UserRecordManager, UserService};
