//! Pure-Rust CartPole environment.
//!
//! Mirrors gymnasium's API: an environment owns its state and exposes it
//! only through `reset` and `step`. The physics is the classic cart-pole
//! model — a cart on a frictionless track, an inverted pendulum hinged on
//! top, a fixed-magnitude push left or right each timestep.
//!
//! # Architecture
//! - `env`: Environment trait, action/step types, registry + factory
//! - `cartpole`: the CartPole-v1 dynamics and termination model
//! - `error`: error taxonomy for misuse of the step contract
//!
//! The simulation is deterministic under a supplied seed; each episode gets
//! its own environment instance. Rendering and action selection are the
//! caller's business — see the `random-agent` binary for reference glue.

pub mod cartpole;
pub mod env;
pub mod error;

pub use cartpole::CartPole;
pub use env::{get_env_config, make, Action, ActionSpace, EnvConfig, Environment, StepResult};
pub use error::EnvError;
