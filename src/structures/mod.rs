pub mod property;
pub mod form;
