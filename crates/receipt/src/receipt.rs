use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phinvoice_core::{DomainError, DomainResult};

/// Fallback filename stem when an order has no name yet.
const DEFAULT_FILENAME_STEM: &str = "receipt";

/// Width of the rendered receipt in characters.
const RECEIPT_WIDTH: usize = 40;

/// One sold item on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    /// Quantity sold; fractional for weighed goods.
    pub quantity: f64,
    pub unit_price: f64,
}

impl ReceiptItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> DomainResult<Self> {
        if quantity <= 0.0 {
            return Err(DomainError::validation(
                "receipt item quantity must be positive",
            ));
        }
        Ok(Self {
            name: name.into(),
            quantity,
            unit_price,
        })
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Clean receipt document: order header, items, totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosReceipt {
    pub order_name: String,
    pub cashier: Option<String>,
    pub items: Vec<ReceiptItem>,
    /// Tax portion of the order total, as computed by the host.
    pub tax_amount: f64,
}

impl PosReceipt {
    pub fn new(order_name: impl Into<String>) -> Self {
        Self {
            order_name: order_name.into(),
            cashier: None,
            items: Vec::new(),
            tax_amount: 0.0,
        }
    }

    pub fn untaxed_total(&self) -> f64 {
        self.items.iter().map(ReceiptItem::subtotal).sum()
    }

    pub fn total(&self) -> f64 {
        self.untaxed_total() + self.tax_amount
    }

    /// Filename for a downloaded receipt image: order name (or "receipt")
    /// plus a compact timestamp.
    pub fn download_filename(&self, at: DateTime<Utc>) -> String {
        let stem = match self.order_name.trim() {
            "" => DEFAULT_FILENAME_STEM,
            name => name,
        };
        format!("{}_{}.jpg", stem, at.format("%Y%m%d%H%M%S"))
    }

    /// Fixed-width text rendering of the clean layout.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:^width$}\n", self.order_name, width = RECEIPT_WIDTH));
        if let Some(cashier) = &self.cashier {
            out.push_str(&format!(
                "{:^width$}\n",
                format!("Cashier: {cashier}"),
                width = RECEIPT_WIDTH
            ));
        }
        out.push_str(&"-".repeat(RECEIPT_WIDTH));
        out.push('\n');

        for item in &self.items {
            let label = format!("{} x {}", item.quantity, item.name);
            out.push_str(&format!(
                "{:<30}{:>10.2}\n",
                label,
                item.subtotal()
            ));
        }

        out.push_str(&"-".repeat(RECEIPT_WIDTH));
        out.push('\n');
        out.push_str(&format!("{:<30}{:>10.2}\n", "Subtotal", self.untaxed_total()));
        out.push_str(&format!("{:<30}{:>10.2}\n", "Tax", self.tax_amount));
        out.push_str(&format!("{:<30}{:>10.2}\n", "TOTAL", self.total()));
        out
    }
}
