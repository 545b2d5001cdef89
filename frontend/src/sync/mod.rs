mod controller;

pub use controller::{ArmOutcome, Phase, SyncController, CONFIRM_WINDOW_MS};
