//! CartPole-v1 — the classic cart-pole control problem, pure Rust.
//!
//! A cart slides on a frictionless track with an inverted pendulum hinged on
//! top. Each timestep the agent pushes the cart left or right with a fixed
//! force; the episode fails when the pole leans past ±12° or the cart leaves
//! ±2.4 m. Dynamics follow the classic-control equations of motion under
//! explicit Euler integration.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::env::{get_env_config, Action, EnvConfig, Environment, StepResult};
use crate::error::EnvError;

const GRAVITY: f64 = 9.8;
const CART_MASS: f64 = 1.0;
const POLE_MASS: f64 = 0.1;
const TOTAL_MASS: f64 = CART_MASS + POLE_MASS;
const POLE_HALF_LENGTH: f64 = 0.5;
const POLE_MASS_LENGTH: f64 = POLE_MASS * POLE_HALF_LENGTH;
const FORCE_MAG: f64 = 10.0;
const TAU: f64 = 0.02; // timestep
const X_THRESHOLD: f64 = 2.4;
const THETA_THRESHOLD: f64 = 12.0 * std::f64::consts::PI / 180.0;
/// Initial state components are drawn uniformly from [-INIT_BOUND, INIT_BOUND].
const INIT_BOUND: f64 = 0.05;

/// The CartPole environment. One instance per logical episode; the physics
/// state lives in f64 and is observed as f32, gymnasium-style.
pub struct CartPole {
    config: EnvConfig,
    /// x, x_dot, theta, theta_dot. None until the first reset.
    state: Option<[f64; 4]>,
    terminated: bool,
    step_count: usize,
    rng: SmallRng,
}

impl CartPole {
    /// Create an environment. No episode is active until [`Environment::reset`]
    /// is called.
    pub fn new(seed: Option<u64>) -> Self {
        let config = get_env_config("CartPole-v1").unwrap();
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        CartPole {
            config,
            state: None,
            terminated: false,
            step_count: 0,
            rng,
        }
    }

    /// Failure check on the post-update state. Strict inequalities: sitting
    /// exactly on a threshold is not terminal.
    fn is_terminal(x: f64, theta: f64) -> bool {
        x < -X_THRESHOLD || x > X_THRESHOLD || theta < -THETA_THRESHOLD || theta > THETA_THRESHOLD
    }

    /// Map an action to a signed force. Only Discrete(0) (push left) and
    /// Discrete(1) (push right) are recognized; nothing is defaulted.
    fn force_for(action: &Action) -> Result<f64, EnvError> {
        match action {
            Action::Discrete(0) => Ok(-FORCE_MAG),
            Action::Discrete(1) => Ok(FORCE_MAG),
            Action::Discrete(n) => Err(EnvError::InvalidArgument {
                message: format!("discrete action {} out of range 0..2", n),
            }),
            Action::Continuous(_) => Err(EnvError::InvalidArgument {
                message: "CartPole-v1 takes discrete actions only".to_string(),
            }),
        }
    }
}

impl Environment for CartPole {
    fn reset(&mut self, seed: Option<u64>) -> Vec<f32> {
        if let Some(s) = seed {
            self.rng = SmallRng::seed_from_u64(s);
        }
        let mut state = [0.0f64; 4];
        for v in &mut state {
            *v = self.rng.gen_range(-INIT_BOUND..=INIT_BOUND);
        }
        self.state = Some(state);
        self.terminated = false;
        self.step_count = 0;
        state.iter().map(|&v| v as f32).collect()
    }

    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError> {
        let [x, x_dot, theta, theta_dot] = self.state.ok_or(EnvError::InvalidState {
            reason: "reset() never called",
        })?;
        if self.terminated {
            return Err(EnvError::InvalidState {
                reason: "episode already terminated",
            });
        }
        let force = Self::force_for(action)?;

        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        let temp = (force + POLE_MASS_LENGTH * theta_dot * theta_dot * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (POLE_HALF_LENGTH * (4.0 / 3.0 - POLE_MASS * cos_theta * cos_theta / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        // Euler integration: position from the old velocity, velocity from
        // the new acceleration. The update order is part of the model.
        let new_x = x + TAU * x_dot;
        let new_x_dot = x_dot + TAU * x_acc;
        let new_theta = theta + TAU * theta_dot;
        let new_theta_dot = theta_dot + TAU * theta_acc;

        let state = [new_x, new_x_dot, new_theta, new_theta_dot];
        self.state = Some(state);
        self.step_count += 1;

        let terminated = Self::is_terminal(new_x, new_theta);
        let truncated = self.step_count >= self.config.max_steps;
        self.terminated = terminated;
        if terminated {
            tracing::debug!(
                steps = self.step_count,
                x = new_x,
                theta = new_theta,
                "Episode terminated"
            );
        }

        Ok(StepResult {
            observation: state.iter().map(|&v| v as f32).collect(),
            // The terminating step itself yields 0.0. Preserved as-is since
            // consumers sum rewards under this convention.
            reward: if terminated { 0.0 } else { 1.0 },
            terminated,
            truncated,
        })
    }

    fn config(&self) -> &EnvConfig {
        &self.config
    }

    fn steps(&self) -> usize {
        self.step_count
    }
}
