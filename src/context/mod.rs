pub mod theme;

pub use theme::{use_theme, Theme, ThemeContext, ThemeProvider};
