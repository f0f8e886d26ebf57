//! Core types for pairwise proportion analysis
//!
//! This crate holds what every other proportion-* crate shares: the unified
//! [`Error`] type, the [`Proportion`] newtype with its arcsine-square-root
//! transform, and the rounding/padding rules used when statistics are written
//! to a report.
//!
//! # Example
//!
//! ```rust
//! use proportion_core::{format_statistic, Proportion};
//!
//! let p = Proportion::new(0.7).unwrap();
//! let q = Proportion::new(0.3).unwrap();
//! let h = 2.0 * (p.transformed() - q.transformed());
//! assert_eq!(format_statistic(h), "0.82");
//! ```

pub mod error;
pub mod format;
pub mod proportion;

pub use error::{Error, Result};
pub use format::{format_statistic, pad_zeros, render_rounded, round_to, shortest_repr};
pub use proportion::{arcsine_sqrt, Proportion};
