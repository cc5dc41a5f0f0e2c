pub mod config;
pub mod error;
pub mod graphs;
pub mod report;
pub mod spanning;
pub mod utility;
