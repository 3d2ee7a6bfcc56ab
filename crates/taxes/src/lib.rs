//! Tax master data and classification.
//!
//! Hosts the `TaxDefinition` snapshot, the VAT-12 / withholding
//! classification rules the localized reports rely on, and the lookup seam
//! the reactive field rules use to find taxes by name.

pub mod tax;

pub use tax::{TaxCategory, TaxDefinition, TaxId, TaxLookup, TaxUse};
