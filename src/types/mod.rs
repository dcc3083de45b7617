pub mod observation;
pub mod prediction;
pub mod season;
