//! UI layer: geometry, drawing commands, and the rendering collaborators.
//!
//! Views speak only `PaintCmd`s. Terminal types stay behind the backend
//! adapter so the shell runs headless in tests.

pub mod backend;
pub mod core;
