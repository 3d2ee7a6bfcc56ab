//! Clean point-of-sale receipt document.
//!
//! Replaces the host's default receipt with a compact layout and provides
//! the download-filename convention used when a receipt is saved as an
//! image.

pub mod receipt;

pub use receipt::{PosReceipt, ReceiptItem};
