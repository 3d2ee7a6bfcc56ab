use serde::{Deserialize, Serialize};

use phinvoice_core::{CompanyId, DomainError, DomainResult, RecordId};

/// Tax definition identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(pub RecordId);

impl TaxId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Direction a tax applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxUse {
    Sale,
    Purchase,
}

/// Explicit tax classification tag.
///
/// When present it replaces the free-text name matching below. Untagged
/// definitions keep the historical substring heuristics so figures on
/// existing reports do not shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxCategory {
    Vat,
    Withholding,
    IdDiscount,
}

/// Tax definition snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDefinition {
    pub id: TaxId,
    /// Display name. Doubles as the pattern-matching key for untagged taxes.
    pub name: String,
    /// Signed percentage rate; negative conventionally denotes a
    /// withholding-style tax.
    pub amount: f64,
    pub tax_use: TaxUse,
    pub company_id: CompanyId,
    pub category: Option<TaxCategory>,
}

impl TaxDefinition {
    pub fn new(
        id: TaxId,
        name: impl Into<String>,
        amount: f64,
        tax_use: TaxUse,
        company_id: CompanyId,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("tax name must not be empty"));
        }
        if !amount.is_finite() {
            return Err(DomainError::validation("tax rate must be finite"));
        }
        Ok(Self {
            id,
            name,
            amount,
            tax_use,
            company_id,
            category: None,
        })
    }

    pub fn with_category(mut self, category: TaxCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// True for the 12% value-added tax bracket.
    ///
    /// The rate must be strictly positive (withholding is encoded as
    /// negative or named distinctly) and sit within 0.01 of 12.0, or the
    /// name must carry "12". Untagged taxes additionally require "VAT" or
    /// "IVA" in the name, case-insensitively.
    pub fn is_vat_12(&self) -> bool {
        if self.amount <= 0.0 {
            return false;
        }
        let rate_is_12 = (self.amount - 12.0).abs() < 0.01 || self.name.contains("12");
        match self.category {
            Some(category) => category == TaxCategory::Vat && rate_is_12,
            None => {
                let name = self.name.to_uppercase();
                (name.contains("VAT") || name.contains("IVA")) && rate_is_12
            }
        }
    }

    /// True for withholding-style taxes (subtracted at source).
    ///
    /// Untagged: negative rate, or a name carrying WHT/WHC/withholding/
    /// creditable, case-insensitively.
    pub fn is_withholding(&self) -> bool {
        match self.category {
            Some(category) => category == TaxCategory::Withholding,
            None => {
                if self.amount < 0.0 {
                    return true;
                }
                let name = self.name.to_uppercase();
                name.contains("WHT")
                    || name.contains("WHC")
                    || name.contains("WITHHOLDING")
                    || name.contains("CREDITABLE")
            }
        }
    }

    /// Case-insensitive substring match on the name (host `ilike` convention).
    pub fn name_matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}

/// Lookup seam the reactive field rules use to find taxes by name.
///
/// Implemented by the host-facing layer over its tax registry.
pub trait TaxLookup {
    /// First sale-use tax of `company_id` whose name contains `pattern`,
    /// case-insensitively. `None` when nothing matches.
    fn find_sale_tax(&self, pattern: &str, company_id: CompanyId) -> Option<TaxDefinition>;
}
