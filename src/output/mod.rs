//! Terminal output formatting
//!
//! Display utilities for the console front-end and command reports.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_dialog, print_help, print_simulation_result, print_statistics, print_toast,
};
