// src/lib.rs

pub mod cli;
pub mod common;
pub mod config;
pub mod forms;
pub mod guards;
pub mod models;
pub mod pages;
pub mod services;
pub mod session;
pub mod table;
