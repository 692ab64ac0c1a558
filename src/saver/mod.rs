//! Saver profiles and CSV input handling

mod data;
mod loader;

pub use data::SaverProfile;
pub use loader::{load_profiles, load_profiles_from_reader, SaverLoadError};
