//! Game entities module.
//!
//! This module organizes node, link and shared cell logic.

pub mod node;
pub mod link;
pub mod cell;
