pub mod aggregate;
pub mod form;

pub use aggregate::{
    Booking, BookingError, BookingId, BookingStatus, ContactDetails, BOOKING_CATEGORY_OPTIONS,
    BOOKING_STATUS_OPTIONS,
};
pub use form::{submit_booking, BookingForm, BookingRequest};
