pub mod config;
pub mod document;
pub mod error;
pub mod parse;
pub mod transform;

pub use transform::converter::Converter;
