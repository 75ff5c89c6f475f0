//! Catalan numbers modulo 1,000,000,007.
//!
//! This crate computes `C(0)..=C(limit)` reduced modulo a fixed prime using the
//! convolution recurrence `C(n) = Σ C(k)·C(n-1-k)`. A closed-form ratio method
//! is available as a faster alternative and is checked to produce identical
//! tables.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ modular.rs  │────▶│  catalan.rs  │────▶│   cli/      │
//! │ (MODULUS,   │     │ (generate,   │     │ (run,       │
//! │  mul_mod)   │     │  closed form)│     │  display)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          types.rs  +  verify/                        │
//! │  (CatalanTable, CatalanError, InvariantError,        │
//! │   validate_terms, debug contracts)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use catalan::{generate, try_generate, CatalanError};
//!
//! let table = generate(4);
//! assert_eq!(table.as_slice(), &[1, 1, 2, 5, 14]);
//!
//! assert!(matches!(try_generate(-1), Err(CatalanError::InvalidArgument { .. })));
//! ```

// Module declarations
mod catalan;
pub mod cli;
pub mod modular;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use catalan::{
    checked_limit, generate, generate_checked, generate_closed_form, generate_with, try_generate,
    Method, CLOSED_FORM_MAX_LIMIT, MAX_LIMIT,
};
pub use modular::MODULUS;
pub use types::{CatalanError, CatalanTable, MAX_DESERIALIZED_TERMS};
pub use verify::InvariantError;
