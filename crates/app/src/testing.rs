//! Scripted random source and in-memory sink shared by the unit tests of
//! this crate.

use std::collections::VecDeque;

use sensorsim_domain::record::Record;

use crate::ports::{EmitError, RandomSource, RecordSink};

/// In-memory sink, keeping every record in order.
impl RecordSink for Vec<Record> {
    fn emit(&mut self, record: &Record) -> Result<(), EmitError> {
        self.push(record.clone());
        Ok(())
    }
}

/// Replays queued draws in order. An exhausted queue falls back to the
/// quietest outcome: `low` for uniform, `mean` for Gaussian (zero noise),
/// `false` for chance, `0` for pick.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    pub uniforms: VecDeque<f64>,
    pub gaussians: VecDeque<f64>,
    pub chances: VecDeque<bool>,
    pub picks: VecDeque<usize>,
    pub draws: usize,
}

impl ScriptedRandom {
    /// A source that never adds noise and never fires a probability.
    pub fn quiet() -> Self {
        Self::default()
    }

    pub fn with_uniforms(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(values);
        self
    }

    /// Queue Gaussian *offsets*; each is added to the requested mean.
    pub fn with_gaussians(mut self, offsets: impl IntoIterator<Item = f64>) -> Self {
        self.gaussians.extend(offsets);
        self
    }

    pub fn with_chances(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(values);
        self
    }

    pub fn with_picks(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(values);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.draws += 1;
        self.uniforms.pop_front().unwrap_or(low)
    }

    fn gaussian(&mut self, mean: f64, _std_dev: f64) -> f64 {
        self.draws += 1;
        mean + self.gaussians.pop_front().unwrap_or(0.0)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.draws += 1;
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}
