pub mod adapter;
pub mod handle;
