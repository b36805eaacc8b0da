pub mod catalog;
pub mod info;
pub mod output;
