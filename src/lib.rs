pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
pub mod webhook;
