//! Main module for lesson library functionality

pub mod classify;
pub mod config;
pub mod content;
pub mod document;
pub mod formats;
pub mod highlight;
pub mod i18n;
pub mod logging;
pub mod prefs;
pub mod render;
pub mod style;
