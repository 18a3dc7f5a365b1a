use gridworld_rl::{config::TrainerConfig, exploration::AlwaysExplore, trainer::Trainer};

fn main() {
    let config = TrainerConfig::default();
    let mut trainer = Trainer::new(config, AlwaysExplore).expect("default config is valid");
    trainer.run();

    let log = trainer.into_trajectories();
    for (episode, trajectory) in log.iter().enumerate() {
        println!(
            "episode {episode:>2} ({} steps): {:?}",
            trajectory.len() - 1,
            trajectory.states()
        );
    }
}
