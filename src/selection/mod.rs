pub mod elitist;
pub mod selection_strategy;
pub mod tournament;

pub use elitist::{best_index, rank_descending, ElitistSelection};
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
