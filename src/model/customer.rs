use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub city: String,
}

/// Who the order is for and where it goes.
///
/// Field names follow the backend's camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub phone_number: String,
}

/// Form fields that failed client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    FirstName,
    LastName,
    Street,
    HouseNumber,
    City,
    PhoneNumber,
}

impl std::fmt::Display for CustomerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CustomerField::FirstName => "first name",
            CustomerField::LastName => "last name",
            CustomerField::Street => "street",
            CustomerField::HouseNumber => "house number",
            CustomerField::City => "city",
            CustomerField::PhoneNumber => "phone number",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(CustomerField),

    #[error("{0} may only contain letters and spaces")]
    NotAName(CustomerField),

    #[error("house number must be digits without a leading zero")]
    BadHouseNumber,

    #[error("phone number should be 10 digits")]
    BadPhoneNumber,
}

/// Length of a valid phone number.
pub const PHONE_DIGITS: usize = 10;

impl CustomerDetails {
    /// Client-side field checks. Advisory only: the backend has the final say.
    pub fn validate(&self) -> Result<(), ValidationError> {
        name_field(&self.first_name, CustomerField::FirstName)?;
        name_field(&self.last_name, CustomerField::LastName)?;
        name_field(&self.address.street, CustomerField::Street)?;
        house_number(&self.address.house_number)?;
        name_field(&self.address.city, CustomerField::City)?;
        phone_number(&self.phone_number)
    }
}

fn name_field(value: &str, field: CustomerField) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err(ValidationError::NotAName(field));
    }
    Ok(())
}

/// Digits only, first digit not `0`. Later zeros are fine: `10` and `105`
/// are valid house numbers, only a leading zero is refused.
fn house_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing(CustomerField::HouseNumber));
    }
    if value.starts_with('0') || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::BadHouseNumber);
    }
    Ok(())
}

fn phone_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing(CustomerField::PhoneNumber));
    }
    if value.len() != PHONE_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::BadPhoneNumber);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> CustomerDetails {
        CustomerDetails {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            address: Address {
                street: "Main Street".into(),
                house_number: "12".into(),
                city: "Springfield".into(),
            },
            phone_number: "0123456789".into(),
        }
    }

    #[test]
    fn accepts_complete_details() {
        assert_eq!(alice().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_and_non_letter_names() {
        let mut c = alice();
        c.first_name = "   ".into();
        assert_eq!(
            c.validate(),
            Err(ValidationError::Missing(CustomerField::FirstName))
        );

        let mut c = alice();
        c.address.city = "Sp1ngfield".into();
        assert_eq!(
            c.validate(),
            Err(ValidationError::NotAName(CustomerField::City))
        );
    }

    #[test]
    fn house_number_is_digits_without_leading_zero() {
        for bad in ["012", "1a", "-3"] {
            let mut c = alice();
            c.address.house_number = bad.into();
            assert_eq!(c.validate(), Err(ValidationError::BadHouseNumber), "{bad}");
        }
        for good in ["7", "10", "105"] {
            let mut c = alice();
            c.address.house_number = good.into();
            assert_eq!(c.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn phone_number_is_exactly_ten_digits() {
        for bad in ["123456789", "12345678901", "01234x6789"] {
            let mut c = alice();
            c.phone_number = bad.into();
            assert_eq!(c.validate(), Err(ValidationError::BadPhoneNumber), "{bad}");
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["address"]["houseNumber"], "12");
        assert_eq!(json["phoneNumber"], "0123456789");
    }
}
