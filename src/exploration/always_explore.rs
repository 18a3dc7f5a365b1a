use super::{Choice, Exploration};

/// Policy that explores unconditionally
///
/// Every step draws a random action no matter what the table holds, so any
/// configured exploration rate is ignored. Useful as a pure-random baseline
/// and for reproducing runs that were trained this way.
pub struct AlwaysExplore;

impl Exploration for AlwaysExplore {
    fn choose(&self, _episode: u32) -> Choice {
        Choice::Explore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exploits() {
        for episode in 0..100 {
            assert_eq!(
                AlwaysExplore.choose(episode),
                Choice::Explore,
                "Exploitation is unreachable under this policy"
            );
        }
    }
}
