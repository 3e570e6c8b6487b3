//! calccore — theme, widgets and runtime helpers for the calculator

pub mod logging;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use theme::{CalcTheme, StyleTable, ThemeState};
