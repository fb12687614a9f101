pub mod app;
pub mod cli;
pub mod config;
pub mod link;
pub mod output;
pub mod paginate;
pub mod selfcheck;
pub mod window;

pub use window::{generate, Marker, Window};

#[cfg(test)]
mod tests;
