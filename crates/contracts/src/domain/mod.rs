pub mod a001_decoration;
pub mod a002_booking;
pub mod a003_wishlist;
pub mod common;
