pub mod performance;
pub mod statistics;
pub mod table;
