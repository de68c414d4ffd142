pub mod editing;
pub mod error;
pub mod models;
pub mod render;

// Re-export key types for easier usage
pub use editing::*;
pub use error::LayoutError;
pub use models::*;
pub use render::*;
