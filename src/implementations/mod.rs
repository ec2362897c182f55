pub mod assessor;
pub mod chat;
pub mod config;
pub mod executor;
pub mod harness;
pub mod synthesizer;
