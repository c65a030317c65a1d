pub mod config;
pub mod handler;
pub mod model;

#[cfg(test)]
mod fixtures;
