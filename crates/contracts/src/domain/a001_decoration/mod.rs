pub mod aggregate;

pub use aggregate::{
    Decoration, DecorationId, DecorationStatus, StatusMessage, StatusTone, CATEGORY_OPTIONS,
    STATUS_OPTIONS,
};
