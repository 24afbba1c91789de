//! UI layer: the app store, text views and the terminal theme.

pub mod app;
pub mod components;
pub mod theme;
pub mod views;
