pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;
