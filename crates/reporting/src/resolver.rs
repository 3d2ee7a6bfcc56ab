//! Tax & discount amount resolver.
//!
//! The host books VAT and withholding into undifferentiated tax lines, so
//! the report figures are recovered through a layered fallback: read the
//! classified tax lines, then recompute from invoice lines, then fall back
//! to broader sums or the total formula. Historical report figures were
//! produced with exactly this order; keep it when touching anything here.

use phinvoice_moves::{Move, TaxLine};

/// Statutory SC/PWD discount rate applied when a discount ID is present.
const ID_DISCOUNT_RATE: f64 = 0.05;

/// Magnitudes below this are rounding noise and reported as zero.
const ROUNDING_TOLERANCE: f64 = 0.01;

/// Report-time tax figures derived from a loaded move.
///
/// All methods are pure reads; absence of matching data degrades to `0.0`
/// rather than an error. `0.0` from [`TaxAmounts::vat_12_amount`] means
/// "no VAT found", never a failure.
pub trait TaxAmounts {
    /// Statutory 5% ID discount on the untaxed amount; `0.0` without a
    /// discount ID.
    fn discount_amount(&self) -> f64;

    /// Untaxed amount net of the ID discount.
    fn discounted_untaxed_amount(&self) -> f64;

    /// The 12% value-added tax booked on this move.
    fn vat_12_amount(&self) -> f64;

    /// The withholding tax on this move, recomputed on the discounted base
    /// when a discount ID is present.
    fn withholding_amount(&self) -> f64;
}

/// Side of the tax line that carries the booked amount for this move.
fn booked_side(record: &Move, line: &TaxLine) -> f64 {
    if record.move_type.is_customer_facing() {
        line.credit
    } else {
        line.debit
    }
}

impl TaxAmounts for Move {
    fn discount_amount(&self) -> f64 {
        if self.discount_id_no.is_some() {
            self.amount_untaxed * ID_DISCOUNT_RATE
        } else {
            0.0
        }
    }

    fn discounted_untaxed_amount(&self) -> f64 {
        self.amount_untaxed - self.discount_amount()
    }

    fn vat_12_amount(&self) -> f64 {
        // Method 1: VAT-12 classified tax lines (most reliable).
        let mut vat_12_amount = 0.0;
        for (tax, line) in self.tax_lines_with_tax() {
            if tax.is_vat_12() {
                vat_12_amount += booked_side(self, line);
            }
        }

        // Method 2: recompute from invoice lines when no tax line matched.
        if vat_12_amount == 0.0 {
            for line in &self.invoice_lines {
                for tax in &line.taxes {
                    if tax.is_vat_12() {
                        vat_12_amount += line.price_subtotal * (tax.amount / 100.0);
                    }
                }
            }
        }

        // Method 3: sum every positive-rate tax line, on the assumption
        // that any positive tax is VAT.
        if vat_12_amount == 0.0 {
            let mut positive_tax_amount = 0.0;
            for (tax, line) in self.tax_lines_with_tax() {
                if tax.amount > 0.0 {
                    positive_tax_amount += booked_side(self, line);
                }
            }
            if positive_tax_amount > 0.0 {
                vat_12_amount = positive_tax_amount;
            }
        }

        vat_12_amount
    }

    fn withholding_amount(&self) -> f64 {
        // Method 1: with a discount ID, reapply the booked withholding rate
        // to the discounted base. First matching tax line wins.
        if self.discount_id_no.is_some() {
            let mut withholding_rate = 0.0;
            for (tax, _) in self.tax_lines_with_tax() {
                if tax.is_withholding() {
                    withholding_rate = tax.amount.abs();
                    break;
                }
            }
            if withholding_rate > 0.0 {
                return self.discounted_untaxed_amount() * (withholding_rate / 100.0);
            }
        }

        // Method 2: sum the booked withholding lines.
        let mut negative_tax_amount = 0.0;
        for (tax, line) in self.tax_lines_with_tax() {
            if tax.is_withholding() {
                negative_tax_amount += (line.credit - line.debit).abs();
            }
        }

        // With a discount ID, rescale the booked sum from the original base
        // to the discounted one.
        if negative_tax_amount > ROUNDING_TOLERANCE && self.discount_id_no.is_some() {
            let original_base = self.amount_untaxed + self.discount_amount();
            if original_base > 0.0 {
                let implied_rate = negative_tax_amount / original_base;
                return self.discounted_untaxed_amount() * implied_rate;
            }
        }

        if negative_tax_amount > ROUNDING_TOLERANCE {
            return negative_tax_amount;
        }

        // Method 3: formula fallback (total - discounted untaxed - VAT 12%),
        // with sub-tolerance magnitudes treated as rounding noise.
        let formula_amount =
            (self.amount_total - self.discounted_untaxed_amount() - self.vat_12_amount()).abs();
        if formula_amount < ROUNDING_TOLERANCE {
            0.0
        } else {
            formula_amount
        }
    }
}
