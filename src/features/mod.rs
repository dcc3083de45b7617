pub mod decompose;
pub mod encode;
pub mod error;
pub mod lag;
pub mod preprocess;
pub mod scale;
