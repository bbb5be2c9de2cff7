pub mod review;

use crate::domain::catalog::ProductCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shipping form as submitted from checkout. Serialized field names match
/// the order service's wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub delivery_instructions: String,
}

/// Per-field validation messages, keyed by form field.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

impl ShippingDetails {
    pub fn with_country_default() -> Self {
        Self {
            country: "India".to_string(),
            ..Self::default()
        }
    }

    /// Validates the form, returning one message per offending field.
    /// An empty map means the order may be submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let phone = self.phone.trim();
        let postal = self.postal_code.trim();

        if self.full_name.trim().is_empty() {
            errors.insert("full_name", "Full name is required");
        }
        if phone.is_empty() {
            errors.insert("phone", "Phone number is required");
        } else if !all_digits(phone, 10) {
            errors.insert("phone", "Enter a valid 10-digit phone number");
        }
        if self.address_line1.trim().is_empty() {
            errors.insert("address_line1", "Address line 1 is required");
        }
        if self.city.trim().is_empty() {
            errors.insert("city", "City is required");
        }
        if self.state.trim().is_empty() {
            errors.insert("state", "State is required");
        }
        if postal.is_empty() {
            errors.insert("postal_code", "Postal code is required");
        } else if !all_digits(postal, 6) {
            errors.insert("postal_code", "Enter a valid 6-digit postal code");
        }
        errors
    }
}

/// A saved payment profile returned by the order service; pre-fills the
/// checkout form for returning customers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub delivery_instructions: Option<String>,
}

impl From<PaymentProfile> for ShippingDetails {
    fn from(profile: PaymentProfile) -> Self {
        let fallback = |value: Option<String>| value.unwrap_or_default();
        Self {
            full_name: fallback(profile.full_name),
            phone: fallback(profile.phone),
            address_line1: fallback(profile.address_line1),
            address_line2: fallback(profile.address_line2),
            city: fallback(profile.city),
            state: fallback(profile.state),
            postal_code: fallback(profile.postal_code),
            country: profile.country.unwrap_or_else(|| "India".to_string()),
            delivery_instructions: fallback(profile.delivery_instructions),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    #[default]
    Cash,
    Card,
    Upi,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash on Delivery",
            Self::Card => "Card",
            Self::Upi => "UPI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub category: ProductCategory,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Order submission body, built from the cart and the validated shipping
/// form. `user_id`/`save_details` keep the service's camelCase spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub shipping: ShippingDetails,
    pub total: f64,
    #[serde(rename = "saveDetails")]
    pub save_details: bool,
}

/// One row of a customer's order history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: Option<i64>,
    #[serde(default, alias = "total")]
    pub total_amount: f64,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Option<OrderSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentProfileResponse {
    pub profile: Option<PaymentProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ShippingDetails {
        ShippingDetails {
            full_name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            address_line1: "12 Vine Street".to_string(),
            address_line2: String::new(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "411001".to_string(),
            country: "India".to_string(),
            delivery_instructions: String::new(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = ShippingDetails::default().validate();
        for field in [
            "full_name",
            "phone",
            "address_line1",
            "city",
            "state",
            "postal_code",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        // Optional fields never produce errors.
        assert!(!errors.contains_key("address_line2"));
        assert!(!errors.contains_key("delivery_instructions"));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let mut form = filled_form();
        form.phone = "98765".to_string();
        assert_eq!(
            form.validate().get("phone"),
            Some(&"Enter a valid 10-digit phone number")
        );
        form.phone = "98765432101".to_string();
        assert!(form.validate().contains_key("phone"));
        form.phone = "98765o3210".to_string();
        assert!(form.validate().contains_key("phone"));
    }

    #[test]
    fn postal_code_must_be_exactly_six_digits() {
        let mut form = filled_form();
        form.postal_code = "4110".to_string();
        assert_eq!(
            form.validate().get("postal_code"),
            Some(&"Enter a valid 6-digit postal code")
        );
        form.postal_code = " 411001 ".to_string();
        assert!(form.validate().is_empty(), "whitespace should be trimmed");
    }

    #[test]
    fn payment_profile_prefills_with_country_fallback() {
        let form: ShippingDetails = PaymentProfile {
            full_name: Some("Asha Rao".to_string()),
            phone: Some("9876543210".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(form.full_name, "Asha Rao");
        assert_eq!(form.country, "India");
        assert!(form.city.is_empty());
    }

    #[test]
    fn order_summary_accepts_total_alias() {
        let summary: OrderSummary =
            serde_json::from_str(r#"{"id": 9, "total": 4200.5}"#).unwrap();
        assert_eq!(summary.total_amount, 4200.5);
    }
}
