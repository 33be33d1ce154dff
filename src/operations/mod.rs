pub mod creation;
pub mod editing;
pub mod query;

mod selection;

pub use selection::FaceSelection;
