pub mod components;
pub mod click_outside;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
