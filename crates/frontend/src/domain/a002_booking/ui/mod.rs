pub mod admin_list;
pub mod booking_form;

pub use booking_form::BookingRequestForm;
