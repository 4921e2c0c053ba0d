//! Page generation modules
//!
//! Each page module builds complete documents from the shared components.

pub mod stats;
