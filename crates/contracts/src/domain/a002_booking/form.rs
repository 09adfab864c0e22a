//! Booking request form and the submit rule.
//!
//! Nothing is persisted: an accepted request is handed back to the caller
//! (which logs it) and the form is cleared. A rejected request leaves the
//! form exactly as the user typed it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::BookingError;
use crate::domain::a001_decoration::{Decoration, DecorationId};
use crate::shared::notification::Notification;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "preferredDate")]
    pub preferred_date: String,
    pub message: String,
}

/// Payload that would be sent to the booking backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "decorId")]
    pub decoration_id: DecorationId,
    #[serde(flatten)]
    pub form: BookingForm,
}

impl BookingRequest {
    pub fn notification(&self) -> Notification {
        Notification::info(
            "Booking Request Submitted",
            "We'll contact you soon to confirm your booking details.",
        )
    }
}

impl BookingForm {
    /// Checks required fields, email shape and that the date is not before `today`
    pub fn validate(&self, today: NaiveDate) -> Result<NaiveDate, BookingError> {
        let required = [
            ("Full Name", &self.name),
            ("Email", &self.email),
            ("Phone Number", &self.phone),
            ("Preferred Date", &self.preferred_date),
            ("Event Address", &self.address),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BookingError::MissingField(*label));
        }

        if !is_valid_email(self.email.trim()) {
            return Err(BookingError::InvalidEmail);
        }

        let date = NaiveDate::parse_from_str(self.preferred_date.trim(), DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate)?;
        if date < today {
            return Err(BookingError::DateInPast);
        }
        Ok(date)
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// Applies the booking rule to `form`.
///
/// Fully booked decorations are refused before anything else is looked at.
/// On success the form is reset; on any error it is left untouched.
pub fn submit_booking(
    decoration: &Decoration,
    form: &mut BookingForm,
    today: NaiveDate,
) -> Result<BookingRequest, BookingError> {
    if !decoration.is_bookable() {
        return Err(BookingError::FullyBooked);
    }
    form.validate(today)?;

    let request = BookingRequest {
        decoration_id: decoration.id.clone(),
        form: std::mem::take(form),
    };
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_decoration::DecorationStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn decoration(status: DecorationStatus) -> Decoration {
        Decoration {
            id: DecorationId::new("3"),
            title: "Birthday Party Decor".into(),
            description: "Colorful".into(),
            category: "birthday".into(),
            images: vec![],
            status,
            added_by: "admin".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            bookings: 0,
            wishlists: 0,
        }
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 0100".into(),
            address: "1 Party Lane".into(),
            preferred_date: "2024-06-20".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_full_decoration_never_clears_form() {
        let mut form = filled_form();
        let result = submit_booking(&decoration(DecorationStatus::Full), &mut form, today());

        assert_eq!(result, Err(BookingError::FullyBooked));
        assert_eq!(form, filled_form());
        let notification = result.unwrap_err().notification();
        assert!(notification.is_destructive());
        assert_ne!(notification.title, "Booking Request Submitted");
    }

    #[test]
    fn test_full_check_comes_before_validation() {
        let mut form = BookingForm::default();
        let result = submit_booking(&decoration(DecorationStatus::Full), &mut form, today());
        assert_eq!(result, Err(BookingError::FullyBooked));
    }

    #[test]
    fn test_accepted_request_resets_form() {
        let mut form = filled_form();
        let request =
            submit_booking(&decoration(DecorationStatus::Reserved), &mut form, today()).unwrap();

        assert_eq!(form, BookingForm::default());
        assert_eq!(request.decoration_id.as_str(), "3");
        assert_eq!(request.form, filled_form());
        assert_eq!(request.notification().title, "Booking Request Submitted");
    }

    #[test]
    fn test_missing_fields_keep_form() {
        let mut form = filled_form();
        form.phone = "   ".into();
        let result = submit_booking(&decoration(DecorationStatus::Available), &mut form, today());

        assert_eq!(result, Err(BookingError::MissingField("Phone Number")));
        assert_eq!(form.phone, "   ");
        assert_eq!(form.name, "Jane Roe");
    }

    #[test]
    fn test_message_is_optional() {
        let form = filled_form();
        assert!(form.message.is_empty());
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_email_and_date_checks() {
        let mut form = filled_form();
        form.email = "jane.example.com".into();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidEmail));

        let mut form = filled_form();
        form.preferred_date = "20/06/2024".into();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidDate));

        let mut form = filled_form();
        form.preferred_date = "2024-05-31".into();
        assert_eq!(form.validate(today()), Err(BookingError::DateInPast));

        let mut form = filled_form();
        form.preferred_date = "2024-06-01".into();
        assert_eq!(form.validate(today()), Ok(today()));
    }

    #[test]
    fn test_request_payload_shape() {
        let request = BookingRequest {
            decoration_id: DecorationId::new("1"),
            form: filled_form(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["decorId"], "1");
        assert_eq!(json["preferredDate"], "2024-06-20");
        assert_eq!(json["name"], "Jane Roe");
    }
}
