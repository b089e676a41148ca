pub mod catalog;
pub mod rankings;
pub mod records;
