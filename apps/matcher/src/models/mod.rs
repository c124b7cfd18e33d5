pub mod career;
pub mod preferences;
pub mod profile;
pub mod traits;

pub use career::{CareerRecord, Question};
pub use preferences::{PreferenceKey, PreferenceProfile, PreferenceWeights};
pub use profile::TraitProfile;
pub use traits::{Trait, TraitScores};
