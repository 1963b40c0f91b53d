//! Collaborator traits
//!
//! These traits define the read-only interface between the status display
//! and the rest of the charger firmware. Nothing behind them is mutated here.

pub mod analog;
pub mod balancer;
pub mod clock;
pub mod power;
pub mod program;

pub use analog::{AnalogInputs, Channel, Quantity};
pub use balancer::{Balancer, Transient, TransientSource};
pub use clock::Clock;
pub use power::PowerStage;
pub use program::{Chemistry, ProgramInfo, ProgramType, VoltageLimit};
