#[cfg_attr(not(feature = "server"), allow(dead_code))]
pub mod catalog;
pub mod endpoints;
#[cfg(feature = "server")]
mod logic;
pub mod models;
