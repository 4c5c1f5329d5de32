use ix_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match vehicle count {expected}")]
    VehicleCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{vehicle} panicked during the run")]
    VehiclePanic { vehicle: VehicleId },
}

pub type SimResult<T> = Result<T, SimError>;
