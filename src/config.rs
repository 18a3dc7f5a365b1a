use crate::{env::Pos, error::ConfigError};

/// Configuration for a training run
///
/// `Default` is the reference 4x4 run: goal in the bottom-right corner,
/// start one cell in from the top-left so the agent is not boxed in, and
/// 50 episodes of at most 50 steps each.
#[derive(Clone, Debug)]
pub struct TrainerConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Cell that ends an episode and pays `goal_reward`
    pub goal: Pos,
    /// Cell every episode starts from
    pub start: Pos,
    /// Reward for arriving on the goal cell
    pub goal_reward: f32,
    /// Learning rate
    pub alpha: f32,
    /// Discount factor
    pub gamma: f32,
    /// Number of episodes to train
    pub episodes: u32,
    /// Maximum steps per episode
    pub step_limit: u32,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            goal: (3, 3),
            start: (1, 1),
            goal_reward: 10.0,
            alpha: 0.1,
            gamma: 0.9,
            episodes: 50,
            step_limit: 50,
        }
    }
}

impl TrainerConfig {
    /// Check every fatal-at-construction condition
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        for (name, state) in [("goal", self.goal), ("start", self.start)] {
            if state.0 >= self.grid_size || state.1 >= self.grid_size {
                return Err(ConfigError::StateOutOfBounds {
                    name,
                    state,
                    size: self.grid_size,
                });
            }
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::InvalidLearningRate(self.alpha));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(ConfigError::InvalidDiscountFactor(self.gamma));
        }
        if self.episodes == 0 {
            return Err(ConfigError::NoEpisodes);
        }
        if self.step_limit == 0 {
            return Err(ConfigError::NoStepLimit);
        }
        Ok(())
    }
}
