pub mod error_formatter;
pub mod error_id;
