pub use cosmos_core::{Orbit, Star};

pub mod clock {
    pub use cosmos_core::clock::*;
}
pub mod config {
    pub use cosmos_core::config::*;
}
pub mod metrics {
    pub use cosmos_core::metrics::*;
}
pub mod orbit_set {
    pub use cosmos_core::orbit_set::*;
}
pub mod random {
    pub use cosmos_core::random::*;
}
pub mod star_field {
    pub use cosmos_core::star_field::*;
}
pub mod record {
    pub use cosmos_data::{OwnedSceneRecord, SceneRecord};
}
pub mod emitter {
    pub use cosmos_io::emitter::*;
}
pub mod sink {
    pub use cosmos_io::sink::*;
}
pub mod error {
    pub use cosmos_io::error::*;
}
