//! 应用层：主题与渲染

pub mod render;
pub mod theme;

pub use render::render;
pub use theme::UiTheme;
