pub mod data_manager;
pub mod ddragon;
pub mod dictionary;
pub mod filter;
