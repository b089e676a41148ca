pub mod docs;
pub mod maps;
pub mod rankings;
pub mod records;
