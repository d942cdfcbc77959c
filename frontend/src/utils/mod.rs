pub mod filter;
pub mod message;
pub mod storage;
pub mod time;
