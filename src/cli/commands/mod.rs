pub mod add;
pub mod category;
pub mod check;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod pin;
pub mod stats;
