pub mod errors;
pub mod generator;
pub mod logging;
pub mod presets;
pub mod render;
pub mod wordpack;
