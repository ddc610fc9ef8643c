pub mod geom;
pub mod layout;
pub mod painter;
pub mod style;
pub mod text;
