// Library exports for the gym manager CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod models;
pub mod service;
pub mod storage;
pub mod ui;
