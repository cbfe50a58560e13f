pub mod extraction;
pub mod observability;
pub mod rendering;
pub mod storage;
pub mod synthesis;
