pub mod divide;
pub mod probe;
