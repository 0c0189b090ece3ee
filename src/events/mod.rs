//! Event handling module.
//!
//! Form events arrive from the host (the command line driver here) and are
//! applied to a controller one at a time.

pub mod form;
