pub mod catalog;
pub mod chart;
pub mod download;
pub mod page;
pub mod setup;
pub mod ui;
pub mod watch;
