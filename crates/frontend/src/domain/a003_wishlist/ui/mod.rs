pub mod page;

pub use page::WishlistPage;
