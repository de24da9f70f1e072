pub mod article;
pub mod table;
