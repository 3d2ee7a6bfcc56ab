//! Report-time computations for the localized invoice layouts.
//!
//! The resolver derives the VAT-12 and withholding figures the host does not
//! expose as first-class totals; the report module assembles the SIM and SIS
//! render models from a move + company snapshot. Everything here is a pure
//! read over already-persisted records.

pub mod report;
pub mod resolver;

pub use report::{InvoiceReport, ReportLayout};
pub use resolver::TaxAmounts;
