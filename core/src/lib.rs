//! Treningsoppsummering for løp, sportsgange og svømming.
//!
//! Rå sensorpakker `(kode, data)` leses av [`dispatch::read_package`], som
//! bygger en [`training::Workout`]. Økten beregner distanse, snittfart og
//! kalorier, og [`message::InfoMessage`] formaterer resultatet.

pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod message;
pub mod metrics;
pub mod packages;
pub mod training;
pub mod validation;

#[cfg(feature = "python")]
mod py;

pub use dispatch::{known_codes, read_package};
pub use errors::{PackageError, ReportError, WorkoutError};
pub use message::InfoMessage;
pub use packages::{load_packages, parse_packages, sample_packages, Package};
pub use training::{Running, Session, SportsWalking, Swimming, Training, Workout};
