pub mod bridge;
pub mod cleanup;
pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod identity;
pub mod launcher;
pub mod logging;
pub mod notify;
pub mod patcher;
pub mod pipeline;
pub mod resolver;
#[cfg(test)]
pub mod tests;
