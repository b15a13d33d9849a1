//! Trait seams between the engine and its host.

pub mod operator;

pub use operator::TableOperator;
