//! Core engine for the notenrechner grade calculator.
//!
//! Pure point-to-grade mapping lives in [`grading`], the bounded in-session
//! history in [`history`]. [`output`] and [`session`] are the terminal
//! presentation glue around those two.

pub mod grading;
pub mod history;
pub mod output;
pub mod session;
