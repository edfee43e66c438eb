//! Supporting utilities shared by the crate's models.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`units`]: Quantity aliases and extensions to [`uom`].
//! - [`validation`]: Ordered diagnostic reports produced by record validators.

pub mod constraint;
pub mod units;
pub mod validation;
