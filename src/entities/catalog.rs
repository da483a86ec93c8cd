//! Sales catalog entries: clients and products

use crate::{impl_field_enum, impl_record};

impl_field_enum!(
    CatalogKind {
        Client => "client",
        Product => "product",
    }
);

impl_record!(
    /// A client or a product of the sales catalog
    CatalogItem,
    "catalog_item",
    ["name", "reference", "category", "email"],
    {
        name: String,
        kind: CatalogKind,
        /// Client code or product SKU
        reference: String,
        category: String,
        email: Option<String>,
        /// Price excluding VAT; unset for clients
        unit_price: Option<f64>,
        /// VAT rate in percent
        vat_rate: Option<f64>,
        active: bool,
    },
    computed { price_with_vat }
);

impl CatalogItem {
    pub fn client(id: &str, name: &str, reference: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: CatalogKind::Client,
            reference: reference.to_string(),
            active: true,
            ..Self::default()
        }
    }

    pub fn product(id: &str, name: &str, reference: &str, unit_price: f64, vat_rate: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: CatalogKind::Product,
            reference: reference.to_string(),
            unit_price: Some(unit_price),
            vat_rate: Some(vat_rate),
            active: true,
            ..Self::default()
        }
    }

    /// Unit price including VAT, when both are known
    pub fn price_with_vat(&self) -> Option<f64> {
        let price = self.unit_price?;
        let rate = self.vat_rate.unwrap_or(0.0);
        Some((price * (100.0 + rate)).round() / 100.0)
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use crate::view::filter::FilterCriteria;

    #[test]
    fn test_product_price_with_vat() {
        let product = CatalogItem::product("p1", "Heure de conseil", "SKU-01", 80.0, 20.0);
        assert_eq!(product.price_with_vat(), Some(96.0));
        assert_eq!(product.field_value("price_with_vat"), Some(FieldValue::Number(96.0)));
    }

    #[test]
    fn test_client_has_no_price() {
        let client = CatalogItem::client("c1", "Client A", "CLI-001");
        assert_eq!(client.field_value("unit_price"), Some(FieldValue::Null));
        assert_eq!(client.field_value("price_with_vat"), Some(FieldValue::Null));
        assert!(!FilterCriteria::new().with_range("unit_price", Some(0.0), None).matches(&client));
    }

    #[test]
    fn test_active_flag_membership() {
        let client = CatalogItem::client("c1", "Client A", "CLI-001").inactive();
        assert!(FilterCriteria::new().with_one_of("active", ["false"]).matches(&client));
        assert!(!FilterCriteria::new().with_one_of("active", ["true"]).matches(&client));
    }

    #[test]
    fn test_search_by_email() {
        let client = CatalogItem::client("c1", "Client A", "CLI-001").with_email("compta@client-a.fr");
        assert!(FilterCriteria::new().with_text("COMPTA@").matches(&client));
    }
}
