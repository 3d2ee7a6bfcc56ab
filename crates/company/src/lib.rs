//! Company master data consumed by the localized invoice reports.
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod company;

pub use company::Company;
