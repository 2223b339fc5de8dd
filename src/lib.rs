// Library root: exposes every module so integration tests can `use modedeck::*`.

pub mod action;
pub mod app;
pub mod carousel;
pub mod catalog;
pub mod components;
pub mod config;
pub mod gallery;
pub mod logging;
pub mod search;
pub mod theme;
pub mod tui;
pub mod ui;
