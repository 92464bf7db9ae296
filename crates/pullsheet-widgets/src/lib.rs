#![forbid(unsafe_code)]

//! Widgets for pullsheet.
//!
//! The crate currently ships one widget, the pull-to-dismiss bottom
//! [`sheet`]. Widgets here never draw: they own interaction state and
//! describe what the host should render each frame.

pub mod sheet;

pub use sheet::{PullSheet, SheetAction, SheetConfig, SheetError};
