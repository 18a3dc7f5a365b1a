use rand::{seq::IteratorRandom, thread_rng};
use strum::{EnumIter, IntoEnumIterator, VariantArray};

/// Position coordinates in the grid as `(row, col)`
pub type Pos = (usize, usize);

/// The four moves available to the agent in every cell
#[derive(EnumIter, VariantArray, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Action {
    /// The `(d_row, d_col)` displacement this action applies
    pub const fn displacement(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

/// A square grid with a single goal cell
///
/// Transitions and rewards are pure functions of the fixed configuration;
/// the environment holds no agent state. Moves that would leave the grid
/// are absorbed: the agent stays put, no action is ever rejected.
pub struct GridWorld {
    size: usize,
    goal: Pos,
    goal_reward: f32,
}

impl GridWorld {
    /// Construct a grid of `size * size` cells
    ///
    /// Bounds are the caller's responsibility; the trainer validates its
    /// configuration before building an environment.
    pub fn new(size: usize, goal: Pos, goal_reward: f32) -> Self {
        Self {
            size,
            goal,
            goal_reward,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.0 < self.size && pos.1 < self.size
    }

    /// Apply `action` to `state`, absorbing moves that would leave the grid
    pub fn transition(&self, state: Pos, action: Action) -> Pos {
        let (d_row, d_col) = action.displacement();
        let row = state.0 as isize + d_row;
        let col = state.1 as isize + d_col;
        if row < 0 || col < 0 || row >= self.size as isize || col >= self.size as isize {
            state
        } else {
            (row as usize, col as usize)
        }
    }

    /// Reward for arriving in `state`: the goal pays out, every other cell is 0
    pub fn reward(&self, state: Pos) -> f32 {
        if state == self.goal {
            self.goal_reward
        } else {
            0.0
        }
    }

    /// A uniformly random action
    pub fn random_action(&self) -> Action {
        Action::iter()
            .choose(&mut thread_rng())
            .expect("Iterator is not empty")
    }
}
