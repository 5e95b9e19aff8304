mod cleanup;
pub mod common;
