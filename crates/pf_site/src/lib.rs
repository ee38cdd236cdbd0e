pub mod app;
pub mod nav;
pub mod scroll_spy;
pub mod section;
pub mod sections;
pub mod social;
