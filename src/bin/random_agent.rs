//! Random-policy driver for the CartPole environment.
//!
//! Reference glue for the library: resets, steps with uniformly random
//! pushes until the episode ends or a step budget runs out, optionally
//! renders each state as text, and reports per-episode results.

use anyhow::{anyhow, Result};
use cartpole_env::{make, Action};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "random-agent", about = "Drive an environment with a random policy")]
struct Cli {
    /// Environment name
    #[arg(long, default_value = "CartPole-v1")]
    env: String,

    /// Seed for both the environment and the policy. Omit for entropy.
    #[arg(long, env = "CARTPOLE_SEED")]
    seed: Option<u64>,

    /// Number of episodes to run
    #[arg(long, default_value = "1")]
    episodes: usize,

    /// Step budget per episode
    #[arg(long, default_value = "100")]
    max_steps: usize,

    /// Print the state after every step
    #[arg(long)]
    render: bool,

    /// Emit a JSON summary per episode instead of log lines
    #[arg(long)]
    json: bool,
}

/// Text rendering of an observation, two decimals per component. Reads the
/// state only; never part of the step contract.
fn render(obs: &[f32]) -> String {
    format!(
        "x: {:.2}, x_dot: {:.2}, theta: {:.2}, theta_dot: {:.2}",
        obs[0], obs[1], obs[2], obs[3]
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut env = make(&cli.env, cli.seed).ok_or_else(|| anyhow!("unknown env: {}", cli.env))?;
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    for ep in 0..cli.episodes {
        env.reset(cli.seed.map(|s| s.wrapping_add(ep as u64)));
        let mut total_reward = 0.0;
        let mut ended_early = false;

        for t in 0..cli.max_steps {
            let action = Action::Discrete(rng.gen_range(0..2));
            let result = env.step(&action)?;
            total_reward += result.reward;
            if cli.render {
                println!("{}", render(&result.observation));
            }
            if result.done() {
                tracing::info!(
                    episode = ep,
                    steps = t + 1,
                    reward = total_reward,
                    terminated = result.terminated,
                    "Episode ended"
                );
                ended_early = true;
                break;
            }
        }
        if !ended_early {
            tracing::info!(
                episode = ep,
                steps = cli.max_steps,
                reward = total_reward,
                "Step budget reached"
            );
        }

        if cli.json {
            let solved = total_reward >= env.config().solved_threshold;
            println!(
                "{}",
                serde_json::json!({
                    "environment": env.config().name,
                    "episode": ep,
                    "steps": env.steps(),
                    "reward": total_reward,
                    "solved": solved,
                })
            );
        }
    }

    Ok(())
}
