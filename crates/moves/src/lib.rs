//! Move (invoice/bill) snapshot model and the localized reactive field rules.
//!
//! The host owns persistence, UI and rendering; this crate layers the
//! Philippine localization fields and their edit-time rules on top of a
//! loaded record, as pure domain logic.

pub mod account_move;
pub mod rules;

pub use account_move::{
    DisplayType, InvoiceLine, Move, MoveId, MoveType, PaymentTerm, PaymentTermId, SaleType,
    TaxLine,
};
