//! # form_internals
//!
//! What a form-associated control sees of its host: the [`ElementInternals`]
//! handle it pushes value and validity through, and the [`ValidityFlags`]
//! model shared with validation procedures.
//!
//! [`FormInternals`] is an in-memory host implementation that records every
//! call, for tests and headless drivers.

mod internals;
mod memory;
mod validity;

pub use internals::{ElementInternals, RestoreMode, ValidationAnchor};
pub use memory::FormInternals;
pub use validity::{ValidityFlag, ValidityFlags};
