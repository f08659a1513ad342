pub mod category;
pub mod color;
pub mod filter;
pub mod schedule;
pub mod tracker;
