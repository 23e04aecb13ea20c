//! Command handlers binding CLI arguments to the fetch/cache/aggregate
//! pipeline.

pub mod attendance;
pub mod common;
pub mod home_advantage;
pub mod match_data;
pub mod team_performance;
pub mod teams;

#[cfg(test)]
mod tests;

pub use common::CommandContext;
