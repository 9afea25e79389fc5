pub mod creation;
pub mod decompose;
pub mod query;
pub mod round;
