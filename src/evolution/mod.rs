pub mod challenge;
pub mod history;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use history::{GenerationRecord, History};
pub use launcher::{Evolution, EvolutionLauncher};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
