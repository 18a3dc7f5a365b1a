use rand::{thread_rng, Rng};

use crate::{
    decay::{self, Decay},
    error::ConfigError,
};

use super::{Choice, Exploration};

/// Epsilon greedy exploration policy with a time-decaying epsilon threshold
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }
}

impl EpsilonGreedy<decay::Constant> {
    /// A fixed exploration rate, validated to lie in `[0, 1]`
    pub fn constant(epsilon: f32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ConfigError::InvalidExplorationRate(epsilon));
        }
        Ok(Self::new(decay::Constant::new(epsilon)))
    }
}

impl<D: Decay> Exploration for EpsilonGreedy<D> {
    fn choose(&self, episode: u32) -> Choice {
        let epsilon = self.epsilon.evaluate(episode as f32);
        if thread_rng().gen::<f32>() < epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epsilon_always_exploits() {
        let policy = EpsilonGreedy::constant(0.0).unwrap();
        for episode in 0..100 {
            assert_eq!(policy.choose(episode), Choice::Exploit, "epsilon = 0 never explores");
        }
    }

    #[test]
    fn unit_epsilon_always_explores() {
        let policy = EpsilonGreedy::constant(1.0).unwrap();
        for episode in 0..100 {
            assert_eq!(policy.choose(episode), Choice::Explore, "epsilon = 1 never exploits");
        }
    }

    #[test]
    fn out_of_range_epsilon_is_rejected() {
        assert_eq!(
            EpsilonGreedy::constant(1.5).err(),
            Some(ConfigError::InvalidExplorationRate(1.5)),
            "epsilon above 1 is invalid"
        );
        assert!(EpsilonGreedy::constant(-0.1).is_err(), "Negative epsilon is invalid");
    }

    #[test]
    fn decayed_epsilon_flips_the_policy_over_time() {
        let policy = EpsilonGreedy::new(decay::Linear::new(1.0, 1.0, 0.0).unwrap());
        assert_eq!(policy.choose(0), Choice::Explore, "Fully exploratory at the start");
        for episode in 1..100 {
            assert_eq!(
                policy.choose(episode),
                Choice::Exploit,
                "Decayed to zero after the first episode"
            );
        }
    }
}
