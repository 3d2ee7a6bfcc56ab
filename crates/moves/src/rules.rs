//! Edit-time reactive rules for the localization fields.
//!
//! The host invokes these on field change; none of them are stored
//! constraints, so batch writes that bypass the form do not trigger them.

use tracing::debug;

use phinvoice_taxes::TaxLookup;

use crate::account_move::{Move, PaymentTerm, SaleType};

/// Payment term name that marks a cash sale.
const IMMEDIATE_PAYMENT_TERM: &str = "Immediate Payment";

/// Name pattern of the statutory 5% ID discount tax.
const ID_DISCOUNT_TAX_NAME: &str = "5% ID Discount";

impl Move {
    /// Derive the sale type from the selected payment term.
    ///
    /// "Immediate Payment" means cash; any other term means charge; no term
    /// defaults to cash.
    pub fn on_payment_term_changed(&mut self, term: Option<&PaymentTerm>) {
        self.sale_type = match term {
            Some(term) if term.name == IMMEDIATE_PAYMENT_TERM => Some(SaleType::Cash),
            Some(_) => Some(SaleType::Charge),
            None => Some(SaleType::Cash),
        };
    }

    /// Cash-sales checkbox semantics: checking selects cash (displacing
    /// charge); unchecking the active kind leaves the sale type unset.
    pub fn set_cash_sales(&mut self, checked: bool) {
        if checked {
            self.sale_type = Some(SaleType::Cash);
        } else if self.sale_type == Some(SaleType::Cash) {
            self.sale_type = None;
        }
    }

    /// Charge-sales checkbox semantics, mirror of [`Move::set_cash_sales`].
    pub fn set_charge_sales(&mut self, checked: bool) {
        if checked {
            self.sale_type = Some(SaleType::Charge);
        } else if self.sale_type == Some(SaleType::Charge) {
            self.sale_type = None;
        }
    }

    /// Attach or detach the statutory "5% ID Discount" tax on product lines
    /// when the discount-eligibility ID is set or cleared.
    ///
    /// A move without invoice lines, or a company without the discount tax
    /// configured, is a no-op.
    pub fn on_discount_id_changed(&mut self, taxes: &dyn TaxLookup) {
        if self.invoice_lines.is_empty() {
            return;
        }
        let Some(discount_tax) = taxes.find_sale_tax(ID_DISCOUNT_TAX_NAME, self.company_id)
        else {
            debug!(move_id = %self.id, "no ID discount tax configured, skipping");
            return;
        };

        if self.discount_id_no.is_some() {
            for line in self.invoice_lines.iter_mut().filter(|line| line.is_product()) {
                if !line.has_tax(discount_tax.id) {
                    line.taxes.push(discount_tax.clone());
                }
            }
            debug!(move_id = %self.id, tax = %discount_tax.name, "attached ID discount tax");
        } else {
            for line in self.invoice_lines.iter_mut().filter(|line| line.is_product()) {
                line.taxes.retain(|tax| tax.id != discount_tax.id);
            }
            debug!(move_id = %self.id, tax = %discount_tax.name, "detached ID discount tax");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account_move::{DisplayType, InvoiceLine, MoveId, MoveType, PaymentTermId};
    use phinvoice_core::{CompanyId, RecordId};
    use phinvoice_taxes::{TaxDefinition, TaxId, TaxUse};

    /// In-memory stand-in for the host tax registry.
    struct TaxRegistry(Vec<TaxDefinition>);

    impl TaxLookup for TaxRegistry {
        fn find_sale_tax(&self, pattern: &str, company_id: CompanyId) -> Option<TaxDefinition> {
            self.0
                .iter()
                .find(|tax| {
                    tax.tax_use == TaxUse::Sale
                        && tax.company_id == company_id
                        && tax.name_matches(pattern)
                })
                .cloned()
        }
    }

    fn test_move() -> Move {
        Move::new(
            MoveId::new(RecordId::new()),
            CompanyId::new(),
            MoveType::OutInvoice,
        )
    }

    fn term(name: &str) -> PaymentTerm {
        PaymentTerm {
            id: PaymentTermId::new(RecordId::new()),
            name: name.to_string(),
        }
    }

    fn discount_tax(company_id: CompanyId) -> TaxDefinition {
        TaxDefinition::new(
            TaxId::new(RecordId::new()),
            "5% ID Discount",
            -5.0,
            TaxUse::Sale,
            company_id,
        )
        .unwrap()
    }

    fn vat_tax(company_id: CompanyId) -> TaxDefinition {
        TaxDefinition::new(
            TaxId::new(RecordId::new()),
            "VAT 12%",
            12.0,
            TaxUse::Sale,
            company_id,
        )
        .unwrap()
    }

    #[test]
    fn immediate_payment_term_selects_cash() {
        phinvoice_observability::init();

        let mut move_ = test_move();
        move_.on_payment_term_changed(Some(&term("Immediate Payment")));
        assert!(move_.is_cash_sales());
        assert!(!move_.is_charge_sales());
    }

    #[test]
    fn deferred_payment_term_selects_charge() {
        let mut move_ = test_move();
        move_.on_payment_term_changed(Some(&term("30 Days")));
        assert!(move_.is_charge_sales());
        assert!(!move_.is_cash_sales());
    }

    #[test]
    fn missing_payment_term_defaults_to_cash() {
        let mut move_ = test_move();
        move_.sale_type = Some(SaleType::Charge);
        move_.on_payment_term_changed(None);
        assert!(move_.is_cash_sales());
    }

    #[test]
    fn checking_one_kind_clears_the_other() {
        let mut move_ = test_move();

        move_.set_cash_sales(true);
        assert!(move_.is_cash_sales());
        assert!(!move_.is_charge_sales());

        move_.set_charge_sales(true);
        assert!(move_.is_charge_sales());
        assert!(!move_.is_cash_sales());
    }

    #[test]
    fn unchecking_the_active_kind_unsets_sale_type() {
        let mut move_ = test_move();
        move_.set_cash_sales(true);
        move_.set_cash_sales(false);
        assert_eq!(move_.sale_type, None);

        // Unchecking the inactive kind changes nothing.
        move_.set_charge_sales(true);
        move_.set_cash_sales(false);
        assert!(move_.is_charge_sales());
    }

    #[test]
    fn setting_discount_id_attaches_tax_to_product_lines() {
        let mut move_ = test_move();
        let discount = discount_tax(move_.company_id);
        let vat = vat_tax(move_.company_id);
        let registry = TaxRegistry(vec![vat.clone(), discount.clone()]);

        move_.invoice_lines.push(InvoiceLine::product(1000.0, vec![vat]));
        move_.invoice_lines.push(InvoiceLine {
            display_type: DisplayType::LineSection,
            price_subtotal: 0.0,
            taxes: Vec::new(),
        });
        move_.discount_id_no = Some(123_456);

        move_.on_discount_id_changed(&registry);

        assert!(move_.invoice_lines[0].has_tax(discount.id));
        // Section rows never receive taxes.
        assert!(move_.invoice_lines[1].taxes.is_empty());

        // A second pass must not attach the tax twice.
        move_.on_discount_id_changed(&registry);
        let count = move_.invoice_lines[0]
            .taxes
            .iter()
            .filter(|tax| tax.id == discount.id)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn clearing_discount_id_detaches_only_the_discount_tax() {
        let mut move_ = test_move();
        let discount = discount_tax(move_.company_id);
        let vat = vat_tax(move_.company_id);
        let registry = TaxRegistry(vec![discount.clone()]);

        move_.invoice_lines.push(InvoiceLine::product(
            1000.0,
            vec![vat.clone(), discount.clone()],
        ));
        move_.discount_id_no = None;

        move_.on_discount_id_changed(&registry);

        assert!(!move_.invoice_lines[0].has_tax(discount.id));
        assert!(move_.invoice_lines[0].has_tax(vat.id));
    }

    #[test]
    fn missing_discount_tax_is_a_no_op() {
        let mut move_ = test_move();
        let vat = vat_tax(move_.company_id);
        let registry = TaxRegistry(Vec::new());

        move_.invoice_lines.push(InvoiceLine::product(1000.0, vec![vat.clone()]));
        move_.discount_id_no = Some(123_456);

        move_.on_discount_id_changed(&registry);

        assert_eq!(move_.invoice_lines[0].taxes.len(), 1);
        assert!(move_.invoice_lines[0].has_tax(vat.id));
    }

    #[test]
    fn discount_tax_of_another_company_is_not_attached() {
        let mut move_ = test_move();
        let foreign = discount_tax(CompanyId::new());
        let registry = TaxRegistry(vec![foreign]);

        move_.invoice_lines.push(InvoiceLine::product(1000.0, Vec::new()));
        move_.discount_id_no = Some(123_456);

        move_.on_discount_id_changed(&registry);

        assert!(move_.invoice_lines[0].taxes.is_empty());
    }
}
