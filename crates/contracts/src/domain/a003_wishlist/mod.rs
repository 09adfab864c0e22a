pub mod aggregate;

pub use aggregate::{toggle_wishlisted, Wishlist, WishlistItem};
