mod app;
pub mod app_core;
pub mod commands;
pub mod events;
pub mod flow;
pub mod input;
pub mod logging;
pub mod once;
pub mod settings;
pub mod state;
pub mod ui;

pub use app::App;

// Not cfg(test)-gated; the tests/ directory links against it
pub mod testing;
