pub mod api;
pub mod client;
pub mod content;
pub mod memory;
pub mod types;
