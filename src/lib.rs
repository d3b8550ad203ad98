pub mod config;
pub mod content;
pub mod domain;
pub mod handlers;
pub mod navigation;
pub mod paths;
pub mod player;
pub mod state;
pub mod theme;
pub mod viewer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
