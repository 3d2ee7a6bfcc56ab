use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phinvoice_core::{CompanyId, RecordId};
use phinvoice_taxes::{TaxDefinition, TaxId};

/// Move identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveId(pub RecordId);

impl MoveId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MoveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Journal direction of the move, as typed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    OutInvoice,
    OutRefund,
    InInvoice,
    InRefund,
    Entry,
}

impl MoveType {
    /// Customer-facing moves book taxes on the credit side; vendor moves on
    /// the debit side.
    pub fn is_customer_facing(self) -> bool {
        matches!(self, MoveType::OutInvoice | MoveType::OutRefund)
    }
}

/// Sales channel of a customer invoice.
///
/// A single enumeration instead of two synchronized checkboxes, so the
/// mutual exclusion holds structurally. The host UI still gets checkbox
/// semantics through [`Move::set_cash_sales`] and [`Move::set_charge_sales`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleType {
    Cash,
    Charge,
}

/// Distinguishes real product lines from section/note rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Product,
    LineSection,
    LineNote,
}

/// Payment term identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentTermId(pub RecordId);

impl PaymentTermId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

/// Payment term reference; only the display name drives the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    pub id: PaymentTermId,
    pub name: String,
}

/// Accounting entry carrying the monetary effect of one tax on the move.
///
/// `credit` and `debit` are mutually offsetting; host journal items without
/// a tax reference appear with `tax: None` and are ignored by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub tax: Option<TaxDefinition>,
    pub credit: f64,
    pub debit: f64,
}

/// Invoice line snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub display_type: DisplayType,
    pub price_subtotal: f64,
    pub taxes: Vec<TaxDefinition>,
}

impl InvoiceLine {
    pub fn product(price_subtotal: f64, taxes: Vec<TaxDefinition>) -> Self {
        Self {
            display_type: DisplayType::Product,
            price_subtotal,
            taxes,
        }
    }

    pub fn is_product(&self) -> bool {
        self.display_type == DisplayType::Product
    }

    pub fn has_tax(&self, id: TaxId) -> bool {
        self.taxes.iter().any(|tax| tax.id == id)
    }
}

/// Move record snapshot with the localization fields layered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: MoveId,
    pub company_id: CompanyId,
    pub move_type: MoveType,
    pub invoice_date: Option<DateTime<Utc>>,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub amount_total: f64,
    pub tax_lines: Vec<TaxLine>,
    pub invoice_lines: Vec<InvoiceLine>,
    /// Cash vs charge sale; `None` until a rule or the user decides.
    pub sale_type: Option<SaleType>,
    /// SC/PWD/NAC/MOV/SOLO parent ID number for discount eligibility.
    pub discount_id_no: Option<i64>,
    /// Signature image verifying the discount ID.
    pub discount_id_signature: Option<Vec<u8>>,
}

impl Move {
    /// Empty move of the given type; amounts and lines start zeroed.
    pub fn new(id: MoveId, company_id: CompanyId, move_type: MoveType) -> Self {
        Self {
            id,
            company_id,
            move_type,
            invoice_date: None,
            amount_untaxed: 0.0,
            amount_tax: 0.0,
            amount_total: 0.0,
            tax_lines: Vec::new(),
            invoice_lines: Vec::new(),
            sale_type: None,
            discount_id_no: None,
            discount_id_signature: None,
        }
    }

    pub fn is_cash_sales(&self) -> bool {
        self.sale_type == Some(SaleType::Cash)
    }

    pub fn is_charge_sales(&self) -> bool {
        self.sale_type == Some(SaleType::Charge)
    }

    /// Tax lines that actually carry a tax definition.
    pub fn tax_lines_with_tax(&self) -> impl Iterator<Item = (&TaxDefinition, &TaxLine)> {
        self.tax_lines
            .iter()
            .filter_map(|line| line.tax.as_ref().map(|tax| (tax, line)))
    }
}
