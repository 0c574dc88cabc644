pub mod arbitrate;
pub mod cfg;
pub mod class;
pub mod error;
pub mod observation;
pub mod state;

/// Opaque sensor-assigned tracking handle.
///
/// Values appear, disappear, and may reappear with a different value across
/// a session; only same-session identity is meaningful.
pub type ActorId = u64;

pub use arbitrate::arbitrate;
pub use cfg::{ArbiterCfg, ClassCfg, SpecialGate};
pub use class::GestureClass;
pub use error::ArbiterError;
pub use observation::{GestureFrame, GestureObservation};
pub use state::{ActorGestureState, ClassState, PROGRESS_NONE};
