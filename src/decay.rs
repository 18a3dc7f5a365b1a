use crate::error::DecayError;

/// A hyperparameter value that decays over training time
pub trait Decay {
    /// Value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, initial: f32, terminal: f32) -> Result<(), DecayError> {
    if (rate >= 0.0 && initial > terminal) || (rate < 0.0 && initial < terminal) {
        Ok(())
    } else {
        Err(DecayError {
            rate,
            initial,
            terminal,
        })
    }
}

/// A fixed value for the whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// v(t) = terminal + (initial - terminal) * e<sup>-rate * t</sup>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exponential {
    rate: f32,
    initial: f32,
    terminal: f32,
}

impl Exponential {
    pub fn new(rate: f32, initial: f32, terminal: f32) -> Result<Self, DecayError> {
        validate(rate, initial, terminal)?;
        Ok(Self {
            rate,
            initial,
            terminal,
        })
    }
}

impl Decay for Exponential {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self {
            rate,
            initial,
            terminal,
        } = self;
        terminal + (initial - terminal) * (-rate * t).exp()
    }
}

/// v(t) = max(initial - rate * t, terminal)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linear {
    rate: f32,
    initial: f32,
    terminal: f32,
}

impl Linear {
    pub fn new(rate: f32, initial: f32, terminal: f32) -> Result<Self, DecayError> {
        validate(rate, initial, terminal)?;
        Ok(Self {
            rate,
            initial,
            terminal,
        })
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self {
            rate,
            initial,
            terminal,
        } = self;
        (initial - rate * t).max(terminal)
    }
}
