//! Client dossiers of the accounting cabinet table

use crate::core::field::IsoDate;
use crate::{impl_field_enum, impl_record};

impl_field_enum!(
    /// Tax regime the client company is filed under
    TaxRegime {
        Micro => "micro",
        RealSimplified => "real_simplified",
        RealNormal => "real_normal",
    }
);

impl_field_enum!(
    /// Progress of the yearly closing
    DossierStatus {
        Open => "open",
        InReview => "in_review",
        Closed => "closed",
        Late => "late",
    }
);

impl_record!(
    /// A client company followed by the cabinet
    Dossier,
    "dossier",
    ["client_name", "siren", "manager"],
    {
        client_name: String,
        /// French company registration number
        siren: String,
        regime: TaxRegime,
        status: DossierStatus,
        /// Accountant in charge
        manager: String,
        closing_date: IsoDate,
        revenue: f64,
        pending_documents: u32,
    }
);

impl Dossier {
    pub fn new(id: &str, client_name: &str, siren: &str) -> Self {
        Self {
            id: id.to_string(),
            client_name: client_name.to_string(),
            siren: siren.to_string(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: DossierStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_regime(mut self, regime: TaxRegime) -> Self {
        self.regime = regime;
        self
    }

    pub fn with_manager(mut self, manager: &str) -> Self {
        self.manager = manager.to_string();
        self
    }

    pub fn with_closing(mut self, closing_date: &str, revenue: f64) -> Self {
        self.closing_date = IsoDate::from(closing_date);
        self.revenue = revenue;
        self
    }

    pub fn with_pending_documents(mut self, count: u32) -> Self {
        self.pending_documents = count;
        self
    }
}
