pub mod api;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod pagination;
pub mod server;
pub mod store;
pub mod utils;

#[cfg(test)]
mod tests;
