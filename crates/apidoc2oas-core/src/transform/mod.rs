pub mod converter;
pub mod ledger;
pub mod operation_id;
pub mod parameters;
pub mod path_normalizer;
pub mod responses;
pub mod type_coercion;

pub use converter::Converter;
