//! Core types shared by both submitters:
//! - Job message payload
//! - Fixed emulator destinations

pub mod models;
pub mod targets;
