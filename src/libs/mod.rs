pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod ordering;
pub mod reminder;
pub mod store;
pub mod task;
pub mod view;
