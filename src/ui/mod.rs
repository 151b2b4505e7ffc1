//! Terminal UI: element tree, components, drawing and the interactive loop.

pub mod app;
pub mod component;
pub mod counter;
pub mod events;
pub mod input;
pub mod layout;
pub mod node;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
