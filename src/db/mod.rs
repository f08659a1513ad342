pub mod categories;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod perfect_days;
pub mod pool;
pub mod records;
pub mod repository;
pub mod stats_info;
pub mod trackers;
