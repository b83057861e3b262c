pub mod energy;
pub mod physics;
pub mod run;
pub mod tuning;

pub use physics::PhysicsState;
pub use run::{PendulumRig, Phase, RigEvent, RigSnapshot};
pub use tuning::RigTuning;
