//! RSI Chicory website: routing, rendering and HTTP wiring.

pub mod app;
pub mod config;
pub mod content;
pub mod context;
pub mod middleware;
pub mod render;
pub mod route;
pub mod site;

pub use config::SiteConfig;
pub use context::PageContext;
pub use route::Route;
pub use site::Site;
