//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions for the stats page:
//! the document layout, the stats card, and the footer.

pub mod footer;
pub mod layout;
pub mod panel;
