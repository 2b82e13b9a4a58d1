pub mod engine;
pub mod logging;
pub mod msg;
pub mod node;
pub mod shared;
pub mod storage;
