//! Environment abstraction.
//!
//! Mirrors gymnasium's API but in pure Rust: each environment defines its
//! observation/action spaces and step/reset dynamics. Environments own their
//! state exclusively; callers see it only through returned observations.

use serde::Serialize;

use crate::error::EnvError;

/// Action space type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ActionSpace {
    /// Discrete actions: 0..n
    Discrete(usize),
    /// Continuous actions: n-dimensional vector in [-1, 1]
    Continuous(usize),
}

impl ActionSpace {
    pub fn size(&self) -> usize {
        match self {
            ActionSpace::Discrete(n) => *n,
            ActionSpace::Continuous(n) => *n,
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, ActionSpace::Discrete(_))
    }
}

/// Action passed to environment.
#[derive(Debug, Clone)]
pub enum Action {
    Discrete(usize),
    Continuous(Vec<f32>),
}

/// Result of a step.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub observation: Vec<f32>,
    pub reward: f64,
    /// Episode failed: a termination threshold was crossed.
    pub terminated: bool,
    /// Episode hit the step limit without failing.
    pub truncated: bool,
}

impl StepResult {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Environment configuration — enough to construct any environment.
#[derive(Debug, Clone, Serialize)]
pub struct EnvConfig {
    pub name: String,
    pub obs_dim: usize,
    pub action_space: ActionSpace,
    pub max_steps: usize,
    pub solved_threshold: f64,
}

/// The core Environment trait.
///
/// Single-threaded and synchronous: one instance per logical episode, or
/// external serialization if an instance must be shared.
pub trait Environment {
    /// Start a new episode, discarding any prior one. Reseeds the
    /// environment's RNG when a seed is given, so trajectories are
    /// reproducible. Returns the initial observation.
    fn reset(&mut self, seed: Option<u64>) -> Vec<f32>;

    /// Advance one timestep under the given action.
    ///
    /// Errors with [`EnvError::InvalidState`] if no episode is active
    /// (never reset, or already terminated) and [`EnvError::InvalidArgument`]
    /// if the action is outside the environment's action space. Termination
    /// is reported through the result, not as an error.
    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError>;

    /// Environment configuration.
    fn config(&self) -> &EnvConfig;

    /// Steps taken in the current episode.
    fn steps(&self) -> usize;
}

/// Registry of known environments.
pub fn get_env_config(name: &str) -> Option<EnvConfig> {
    match name {
        "CartPole-v1" => Some(EnvConfig {
            name: name.to_string(),
            obs_dim: 4,
            action_space: ActionSpace::Discrete(2),
            max_steps: 500,
            solved_threshold: 475.0,
        }),
        _ => None,
    }
}

/// Factory: create an environment by name.
pub fn make(name: &str, seed: Option<u64>) -> Option<Box<dyn Environment>> {
    match name {
        "CartPole-v1" => Some(Box::new(crate::cartpole::CartPole::new(seed))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartpole_config() {
        let cfg = get_env_config("CartPole-v1").unwrap();
        assert_eq!(cfg.obs_dim, 4);
        assert_eq!(cfg.action_space, ActionSpace::Discrete(2));
        assert!(cfg.action_space.is_discrete());
        assert_eq!(cfg.action_space.size(), 2);
        assert_eq!(cfg.max_steps, 500);
    }

    #[test]
    fn test_unknown_env() {
        assert!(get_env_config("LunarLander-v3").is_none());
        assert!(make("LunarLander-v3", None).is_none());
    }

    #[test]
    fn test_factory_roundtrip() {
        let mut env = make("CartPole-v1", Some(42)).unwrap();
        let obs = env.reset(Some(42));
        assert_eq!(obs.len(), env.config().obs_dim);
        let result = env.step(&Action::Discrete(1)).unwrap();
        assert_eq!(result.observation.len(), 4);
        assert!(!result.terminated);
    }
}
