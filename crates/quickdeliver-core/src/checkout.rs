//! Checkout form state
//!
//! Fields are free text and are never validated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    pub fn toggled(&self) -> PaymentMethod {
        match self {
            PaymentMethod::Card => PaymentMethod::CashOnDelivery,
            PaymentMethod::CashOnDelivery => PaymentMethod::Card,
        }
    }
}

/// Editable checkout fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    FirstName,
    LastName,
    Phone,
    Street,
    City,
    Zip,
    CardNumber,
    Expiry,
    Cvv,
    Instructions,
}

impl CheckoutField {
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First Name",
            CheckoutField::LastName => "Last Name",
            CheckoutField::Phone => "Phone Number",
            CheckoutField::Street => "Street Address",
            CheckoutField::City => "City",
            CheckoutField::Zip => "ZIP Code",
            CheckoutField::CardNumber => "Card Number",
            CheckoutField::Expiry => "Expiry Date",
            CheckoutField::Cvv => "CVV",
            CheckoutField::Instructions => "Delivery Instructions",
        }
    }

    pub fn is_card_field(&self) -> bool {
        matches!(
            self,
            CheckoutField::CardNumber | CheckoutField::Expiry | CheckoutField::Cvv
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub payment: PaymentMethod,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub instructions: String,
}

impl CheckoutForm {
    /// Fields shown for the selected payment method
    pub fn visible_fields(&self) -> Vec<CheckoutField> {
        const ALL: [CheckoutField; 10] = [
            CheckoutField::FirstName,
            CheckoutField::LastName,
            CheckoutField::Phone,
            CheckoutField::Street,
            CheckoutField::City,
            CheckoutField::Zip,
            CheckoutField::CardNumber,
            CheckoutField::Expiry,
            CheckoutField::Cvv,
            CheckoutField::Instructions,
        ];
        ALL.into_iter()
            .filter(|f| self.payment == PaymentMethod::Card || !f.is_card_field())
            .collect()
    }

    pub fn field(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Phone => &self.phone,
            CheckoutField::Street => &self.street,
            CheckoutField::City => &self.city,
            CheckoutField::Zip => &self.zip,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::Expiry => &self.expiry,
            CheckoutField::Cvv => &self.cvv,
            CheckoutField::Instructions => &self.instructions,
        }
    }

    pub fn field_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::FirstName => &mut self.first_name,
            CheckoutField::LastName => &mut self.last_name,
            CheckoutField::Phone => &mut self.phone,
            CheckoutField::Street => &mut self.street,
            CheckoutField::City => &mut self.city,
            CheckoutField::Zip => &mut self.zip,
            CheckoutField::CardNumber => &mut self.card_number,
            CheckoutField::Expiry => &mut self.expiry,
            CheckoutField::Cvv => &mut self.cvv,
            CheckoutField::Instructions => &mut self.instructions,
        }
    }

    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields_hidden_for_cash() {
        let mut form = CheckoutForm::default();
        assert_eq!(form.visible_fields().len(), 10);

        form.payment = form.payment.toggled();
        assert_eq!(form.payment, PaymentMethod::CashOnDelivery);
        let fields = form.visible_fields();
        assert_eq!(fields.len(), 7);
        assert!(fields.iter().all(|f| !f.is_card_field()));
    }

    #[test]
    fn test_set_and_read_field() {
        let mut form = CheckoutForm::default();
        form.set(CheckoutField::Zip, "10001");
        form.field_mut(CheckoutField::City).push_str("New York");
        assert_eq!(form.field(CheckoutField::Zip), "10001");
        assert_eq!(form.city, "New York");
    }
}
