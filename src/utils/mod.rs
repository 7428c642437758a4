pub mod datetime;
pub mod i18n;
