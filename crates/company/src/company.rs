use serde::{Deserialize, Serialize};

use phinvoice_core::CompanyId;

/// Company record snapshot, as loaded from the host.
///
/// Carries the postal address printed on invoice headers plus the
/// branch-level VAT/TIN identifier added by the localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    /// Branch specific VAT or TIN number.
    pub branch_vat_tin: Option<String>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            street: None,
            street2: None,
            city: None,
            state: None,
            zip: None,
            country: None,
            branch_vat_tin: None,
        }
    }

    /// Branch address as a single comma-joined line for PDF headers.
    ///
    /// Missing or blank parts are skipped.
    pub fn single_line_address(&self) -> String {
        [
            &self.street,
            &self.street2,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
