use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phinvoice_company::Company;
use phinvoice_moves::Move;

use crate::resolver::TaxAmounts;

/// The two localized invoice report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLayout {
    Sim,
    Sis,
}

/// Render model consumed by the invoice report templates.
///
/// Pure assembly: every figure comes from the move snapshot, the company
/// record, and the resolver. Markup and styling stay with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceReport {
    pub layout: ReportLayout,
    pub company_name: String,
    pub branch_address: String,
    pub branch_vat_tin: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub is_cash_sales: bool,
    pub is_charge_sales: bool,
    pub discount_id_no: Option<i64>,
    pub has_discount_signature: bool,
    pub amount_untaxed: f64,
    pub discount_amount: f64,
    pub discounted_untaxed_amount: f64,
    pub vat_12_amount: f64,
    pub withholding_amount: f64,
    pub amount_total: f64,
}

impl InvoiceReport {
    /// Assemble the render model for one move under the given layout.
    pub fn build(layout: ReportLayout, record: &Move, company: &Company) -> Self {
        Self {
            layout,
            company_name: company.name.clone(),
            branch_address: company.single_line_address(),
            branch_vat_tin: company.branch_vat_tin.clone(),
            invoice_date: record.invoice_date,
            is_cash_sales: record.is_cash_sales(),
            is_charge_sales: record.is_charge_sales(),
            discount_id_no: record.discount_id_no,
            has_discount_signature: record.discount_id_signature.is_some(),
            amount_untaxed: record.amount_untaxed,
            discount_amount: record.discount_amount(),
            discounted_untaxed_amount: record.discounted_untaxed_amount(),
            vat_12_amount: record.vat_12_amount(),
            withholding_amount: record.withholding_amount(),
            amount_total: record.amount_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phinvoice_core::{CompanyId, RecordId};
    use phinvoice_moves::{MoveId, MoveType, SaleType, TaxLine};
    use phinvoice_taxes::{TaxDefinition, TaxId, TaxUse};

    fn test_company() -> Company {
        let mut company = Company::new(CompanyId::new(), "MSC Branch Cebu");
        company.street = Some("123 Osmena Blvd".to_string());
        company.city = Some("Cebu City".to_string());
        company.country = Some("Philippines".to_string());
        company.branch_vat_tin = Some("123-456-789-000".to_string());
        company
    }

    fn test_move(company_id: CompanyId) -> Move {
        let mut move_ = Move::new(
            MoveId::new(RecordId::new()),
            company_id,
            MoveType::OutInvoice,
        );
        move_.amount_untaxed = 1000.0;
        move_.amount_total = 1120.0;
        move_.sale_type = Some(SaleType::Cash);
        let vat = TaxDefinition::new(
            TaxId::new(RecordId::new()),
            "VAT 12%",
            12.0,
            TaxUse::Sale,
            company_id,
        )
        .unwrap();
        move_.tax_lines.push(TaxLine {
            tax: Some(vat),
            credit: 120.0,
            debit: 0.0,
        });
        move_
    }

    #[test]
    fn build_assembles_company_and_resolver_figures() {
        let company = test_company();
        let move_ = test_move(company.id);

        let report = InvoiceReport::build(ReportLayout::Sim, &move_, &company);

        assert_eq!(report.layout, ReportLayout::Sim);
        assert_eq!(report.company_name, "MSC Branch Cebu");
        assert_eq!(
            report.branch_address,
            "123 Osmena Blvd, Cebu City, Philippines"
        );
        assert_eq!(report.branch_vat_tin.as_deref(), Some("123-456-789-000"));
        assert!(report.is_cash_sales);
        assert!(!report.is_charge_sales);
        assert_eq!(report.discount_id_no, None);
        assert!(!report.has_discount_signature);
        assert_eq!(report.amount_untaxed, 1000.0);
        assert_eq!(report.discount_amount, 0.0);
        assert_eq!(report.vat_12_amount, 120.0);
        assert_eq!(report.withholding_amount, 0.0);
        assert_eq!(report.amount_total, 1120.0);
    }

    #[test]
    fn discount_fields_follow_the_discount_id() {
        let company = test_company();
        let mut move_ = test_move(company.id);
        move_.discount_id_no = Some(123_456);
        move_.discount_id_signature = Some(vec![0xFF, 0xD8]);

        let report = InvoiceReport::build(ReportLayout::Sis, &move_, &company);

        assert_eq!(report.discount_id_no, Some(123_456));
        assert!(report.has_discount_signature);
        assert_eq!(report.discount_amount, 50.0);
        assert_eq!(report.discounted_untaxed_amount, 950.0);
    }

    #[test]
    fn report_serializes_with_host_facing_field_names() {
        let company = test_company();
        let move_ = test_move(company.id);

        let report = InvoiceReport::build(ReportLayout::Sim, &move_, &company);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["layout"], "sim");
        assert_eq!(json["company_name"], "MSC Branch Cebu");
        assert_eq!(json["vat_12_amount"], 120.0);
        assert_eq!(json["is_cash_sales"], true);
    }
}
