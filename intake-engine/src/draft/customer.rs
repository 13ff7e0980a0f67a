//! Customer reference of the draft

use super::money::coerce_amount;
use shared::models::Customer;
use shared::order::{CustomerField, CustomerRef, InlineCustomer};
use tracing::debug;

/// Attach an existing customer, replacing any typed-in data
pub fn select_customer(customer: &mut CustomerRef, record: &Customer) {
    *customer = CustomerRef::Existing(record.clone());
}

/// Back to an empty inline customer
pub fn clear_customer(customer: &mut CustomerRef) {
    *customer = CustomerRef::Inline(InlineCustomer::default());
}

/// Edit one inline field
///
/// While an existing customer is attached the fields are read-only.
pub fn set_customer_field(customer: &mut CustomerRef, field: CustomerField, value: &str) -> bool {
    let CustomerRef::Inline(inline) = customer else {
        debug!(?field, "Customer field edit ignored: existing customer selected");
        return false;
    };
    match field {
        CustomerField::CustomerNo => inline.customer_no = value.to_string(),
        CustomerField::Name => inline.name = value.to_string(),
        CustomerField::Phone => inline.phone = value.to_string(),
        CustomerField::OpeningBalance => inline.opening_balance = coerce_amount(value),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn omar() -> Customer {
        Customer {
            id: 7,
            customer_id: "102".to_string(),
            name: "Omar".to_string(),
            phone: "0912".to_string(),
            balance: Decimal::new(1550, 2),
            points: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_select_replaces_inline() {
        let mut customer = CustomerRef::default();
        set_customer_field(&mut customer, CustomerField::Name, "Draft name");
        select_customer(&mut customer, &omar());
        assert!(matches!(&customer, CustomerRef::Existing(c) if c.id == 7));
        assert_eq!(customer.current_balance(), Decimal::new(1550, 2));
    }

    #[test]
    fn test_inline_fields() {
        let mut customer = CustomerRef::default();
        set_customer_field(&mut customer, CustomerField::Name, "Sara");
        set_customer_field(&mut customer, CustomerField::Phone, "0999");
        set_customer_field(&mut customer, CustomerField::OpeningBalance, "12.5");
        set_customer_field(&mut customer, CustomerField::CustomerNo, "C-3");

        let CustomerRef::Inline(inline) = &customer else {
            panic!("expected inline customer");
        };
        assert_eq!(inline.name, "Sara");
        assert_eq!(inline.phone, "0999");
        assert_eq!(inline.customer_no, "C-3");
        assert_eq!(inline.opening_balance, Decimal::new(1250, 2));
    }

    #[test]
    fn test_bad_opening_balance_is_zero() {
        let mut customer = CustomerRef::default();
        set_customer_field(&mut customer, CustomerField::OpeningBalance, "lots");
        assert_eq!(customer.current_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_fields_locked_for_existing_customer() {
        let mut customer = CustomerRef::default();
        select_customer(&mut customer, &omar());
        assert!(!set_customer_field(&mut customer, CustomerField::Name, "Other"));

        clear_customer(&mut customer);
        assert!(set_customer_field(&mut customer, CustomerField::Name, "Other"));
    }
}
