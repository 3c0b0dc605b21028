pub mod greet;
pub mod math;
