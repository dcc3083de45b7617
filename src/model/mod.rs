pub mod assemble;
pub mod error;
pub mod linear;
pub mod trainer;
