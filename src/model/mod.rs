//! Domain models mirroring the API wire contract.

mod fleet;
mod telemetry;
mod trip;
mod user;
mod vehicle;

pub use fleet::{Fleet, Loan};
pub use telemetry::{Accelerometer, Location, Signal, Status};
pub use trip::{Mileage, Trip, UsedTime};
pub use user::{Authorization, Gender, User};
pub use vehicle::{Device, Privacy, Vehicle};
