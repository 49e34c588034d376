//! egui rendering of the application state.

pub mod chart;
pub mod panels;
pub mod summary;
pub mod table;
