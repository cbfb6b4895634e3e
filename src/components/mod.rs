//! Reusable UI components.

pub mod journey;
