use strum::VariantArray;

use crate::env::{Action, Pos};

/// Dense table of action-value estimates for a square grid
///
/// Holds exactly `size * size * 4` entries for the lifetime of the table,
/// all starting at zero. The learning rate and discount factor are fixed at
/// construction and applied by [`update`](QTable::update). Indices are
/// trusted; states come from an environment that never leaves the grid.
pub struct QTable {
    values: Vec<f32>,
    size: usize,
    alpha: f32,
    gamma: f32,
}

impl QTable {
    /// Create a zero-initialized table for a `size * size` grid
    pub fn new(size: usize, alpha: f32, gamma: f32) -> Self {
        Self {
            values: vec![0.0; size * size * Action::VARIANTS.len()],
            size,
            alpha,
            gamma,
        }
    }

    fn index(&self, state: Pos, action: Action) -> usize {
        (state.0 * self.size + state.1) * Action::VARIANTS.len() + action as usize
    }

    /// Current estimate for a state-action pair
    pub fn get(&self, state: Pos, action: Action) -> f32 {
        self.values[self.index(state, action)]
    }

    /// Overwrite the estimate for a state-action pair
    pub fn set(&mut self, state: Pos, action: Action, value: f32) {
        let i = self.index(state, action);
        self.values[i] = value;
    }

    /// Maximum estimate across all actions in `state`, the bootstrap target
    pub fn max_over_actions(&self, state: Pos) -> f32 {
        Action::VARIANTS
            .iter()
            .map(|&a| self.get(state, a))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// The highest-valued action in `state`
    ///
    /// Ties keep the first action in enumeration order, so a fresh table
    /// always yields `Up`. A strict-improvement fold is used on purpose:
    /// `max_by` would keep the last of several equal maxima.
    pub fn greedy_action(&self, state: Pos) -> Action {
        let mut best = Action::VARIANTS[0];
        let mut best_value = self.get(state, best);
        for &action in &Action::VARIANTS[1..] {
            let value = self.get(state, action);
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }

    /// Apply the temporal-difference update
    ///
    /// `Q(s,a) += alpha * (reward + gamma * next_max - Q(s,a))` where
    /// `next_max` is the caller-supplied bootstrap from the successor state.
    pub fn update(&mut self, state: Pos, action: Action, reward: f32, next_max: f32) {
        let i = self.index(state, action);
        let q = self.values[i];
        self.values[i] = q + self.alpha * (reward + self.gamma * next_max - q);
    }

    /// Number of stored entries, constant from construction
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True while no update or set has touched the table
    pub fn is_zeroed(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
