use log::{debug, info, trace};

use crate::{
    config::TrainerConfig,
    env::{Action, GridWorld, Pos},
    error::ConfigError,
    exploration::{Choice, Exploration},
    q_table::QTable,
    trajectory::{EpisodeOutcome, Trajectory, TrajectoryLog},
};

/// Drives training episodes over a [`GridWorld`]
///
/// Owns the action-value table and the trajectory log for one run. Episodes
/// run strictly in sequence; the table persists across episodes while each
/// episode records a fresh trajectory. Parallel runs each construct their
/// own trainer, so the table is never shared.
pub struct Trainer<X: Exploration> {
    env: GridWorld,
    q_table: QTable,
    exploration: X,
    start: Pos,
    episodes: u32,
    step_limit: u32,
    episode: u32,
    log: TrajectoryLog,
}

impl<X: Exploration> Trainer<X> {
    /// Validate `config` and set up a run with an all-zero table
    pub fn new(config: TrainerConfig, exploration: X) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            env: GridWorld::new(config.grid_size, config.goal, config.goal_reward),
            q_table: QTable::new(config.grid_size, config.alpha, config.gamma),
            exploration,
            start: config.start,
            episodes: config.episodes,
            step_limit: config.step_limit,
            episode: 0,
            log: TrajectoryLog::new(),
        })
    }

    /// Choose an action for `state` under the exploration policy
    fn act(&self, state: Pos) -> Action {
        match self.exploration.choose(self.episode) {
            Choice::Explore => self.env.random_action(),
            Choice::Exploit => self.q_table.greedy_action(state),
        }
    }

    /// Run one episode from the configured start state
    ///
    /// Steps until the goal is reached or the step limit runs out, updating
    /// the table after every transition and recording each visited state.
    /// Exhausting the step limit is a normal outcome, not an error.
    pub fn run_episode(&mut self) -> EpisodeOutcome {
        let mut state = self.start;
        let mut trajectory = Trajectory::new(state);
        let mut outcome = EpisodeOutcome::Exhausted;

        for _ in 0..self.step_limit {
            let action = self.act(state);
            let next_state = self.env.transition(state, action);
            let reward = self.env.reward(next_state);
            let next_max = self.q_table.max_over_actions(next_state);
            self.q_table.update(state, action, reward, next_max);

            trajectory.push(next_state);
            state = next_state;
            if state == self.env.goal() {
                outcome = EpisodeOutcome::Succeeded;
                break;
            }
        }

        debug!(
            "episode {}: {:?} after {} steps",
            self.episode,
            outcome,
            trajectory.len() - 1
        );
        trace!("episode {} path: {:?}", self.episode, trajectory.states());

        self.log.record(trajectory);
        self.episode += 1;
        outcome
    }

    /// Run episodes until the configured count is reached
    ///
    /// Stops unconditionally after the last episode; there is no
    /// convergence detection. Calling again once complete does nothing.
    pub fn run(&mut self) {
        info!(
            "training {} episodes on a {size}x{size} grid",
            self.episodes,
            size = self.env.size()
        );

        let mut succeeded = 0u32;
        while self.episode < self.episodes {
            if self.run_episode() == EpisodeOutcome::Succeeded {
                succeeded += 1;
            }
        }

        info!(
            "training finished: {}/{} episodes reached the goal",
            succeeded, self.episodes
        );
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn trajectories(&self) -> &TrajectoryLog {
        &self.log
    }

    /// Hand the recorded trajectories off, consuming the trainer
    pub fn into_trajectories(self) -> TrajectoryLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exploration::{AlwaysExplore, EpsilonGreedy};

    fn adjacent_or_same(a: Pos, b: Pos) -> bool {
        a.0.abs_diff(b.0) + a.1.abs_diff(b.1) <= 1
    }

    #[test]
    fn construction_trains_nothing() {
        let trainer = Trainer::new(TrainerConfig::default(), AlwaysExplore).unwrap();
        assert!(trainer.q_table().is_zeroed(), "No updates before the first episode");
        assert!(trainer.trajectories().is_empty(), "No trajectories before the first episode");
    }

    #[test]
    fn invalid_configuration_never_trains() {
        let config = TrainerConfig {
            grid_size: 1,
            goal: (0, 0),
            start: (0, 0),
            ..Default::default()
        };
        assert!(
            Trainer::new(config, AlwaysExplore).is_err(),
            "Construction fails instead of producing a broken trainer"
        );
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let config = TrainerConfig {
            episodes: 1,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, AlwaysExplore).unwrap();
        let outcome = trainer.run_episode();

        assert_eq!(trainer.trajectories().len(), 1, "One episode, one trajectory");
        let trajectory = &trainer.trajectories().all()[0];

        assert_eq!(trajectory.start(), (1, 1), "Episode starts at the configured start");
        assert!(trajectory.len() <= 51, "At most step_limit + 1 states");
        for &state in trajectory.states() {
            assert!(state.0 < 4 && state.1 < 4, "Every visited state is in bounds");
        }
        for window in trajectory.states().windows(2) {
            assert!(
                adjacent_or_same(window[0], window[1]),
                "Consecutive states are neighbors or equal (wall bounce)"
            );
        }
        assert_eq!(
            trajectory.reached((3, 3)),
            outcome == EpisodeOutcome::Succeeded,
            "Trajectory ends on the goal exactly when the episode succeeded"
        );
    }

    #[test]
    fn exploitation_follows_the_seeded_table() {
        let config = TrainerConfig {
            grid_size: 2,
            goal: (0, 0),
            start: (1, 1),
            alpha: 0.5,
            gamma: 0.9,
            episodes: 1,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, EpsilonGreedy::constant(0.0).unwrap()).unwrap();
        trainer.q_table.set((1, 1), Action::Left, 5.0);

        let outcome = trainer.run_episode();

        assert_eq!(outcome, EpisodeOutcome::Succeeded, "Two greedy steps reach the goal");
        let trajectory = &trainer.trajectories().all()[0];
        assert_eq!(
            trajectory.states(),
            [(1, 1), (1, 0), (0, 0)],
            "Left out of the start, then Up on the all-zero tie"
        );
    }

    #[test]
    fn learning_persists_across_episodes() {
        let config = TrainerConfig {
            grid_size: 2,
            goal: (0, 0),
            start: (1, 1),
            episodes: 20,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, AlwaysExplore).unwrap();
        trainer.run();

        assert_eq!(trainer.trajectories().len(), 20, "One trajectory per episode");
        assert!(
            !trainer.q_table().is_zeroed(),
            "Goal rewards propagate into the table across episodes"
        );
        assert_eq!(trainer.q_table().len(), 2 * 2 * 4, "Table size is untouched by training");
    }

    #[test]
    fn run_stops_at_the_configured_episode_count() {
        let config = TrainerConfig {
            episodes: 3,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, AlwaysExplore).unwrap();
        trainer.run();
        trainer.run();

        assert_eq!(trainer.trajectories().len(), 3, "A completed run never adds episodes");
    }

    #[test]
    fn every_trajectory_starts_at_the_start_state() {
        let config = TrainerConfig {
            episodes: 5,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, AlwaysExplore).unwrap();
        trainer.run();

        for trajectory in trainer.trajectories() {
            assert_eq!(trajectory.start(), (1, 1), "Episodes always begin at the start state");
            assert!(trajectory.len() >= 2, "Every episode takes at least one step");
        }
    }
}
