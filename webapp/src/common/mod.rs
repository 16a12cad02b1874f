pub mod storage;
pub mod style;
