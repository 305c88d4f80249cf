//! # Teacher
//!
//! Keeps an ordered sample set and drives epochs of error-correction learning
//! on a borrowed learner (a single [`Neuron`](mvn_core::Neuron) or a whole
//! [`Network`](mvn_core::Network)).
//!
//! Samples are visited strictly in insertion order: each correction is
//! measured against the weights left by the previous one.

use crate::config::TrainingConfig;
use crate::error::{LearningError, LearningResult};
use crate::learner::{Learner, Residual};
use crate::predicates::{AlwaysPick, Match, Picker, SquareError};
use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Outcome of a `train_until_*` loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochReport {
    /// Epochs run
    pub epochs: usize,
    /// Hits after the last epoch, when the loop counted them
    pub hits: Option<usize>,
    /// MSE after the last epoch, when the loop measured it
    pub mse: Option<f64>,
    pub converged: bool,
}

/// Drives a learner over a sample set
pub struct Teacher<'a, L: Learner> {
    learner: &'a mut L,
    samples: Vec<Sample<L::Desired>>,
    config: TrainingConfig,
}

impl<'a, L: Learner> Teacher<'a, L> {
    pub fn new(learner: &'a mut L) -> Self {
        Self::with_samples(learner, Vec::new())
    }

    pub fn with_samples(learner: &'a mut L, samples: Vec<Sample<L::Desired>>) -> Self {
        Self {
            learner,
            samples,
            config: TrainingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TrainingConfig) -> LearningResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Appends a sample; duplicates are kept
    pub fn add_sample(&mut self, sample: Sample<L::Desired>) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample<L::Desired>] {
        &self.samples
    }

    pub fn samples_count(&self) -> usize {
        self.samples.len()
    }

    pub fn learner(&self) -> &L {
        &*self.learner
    }

    /// Number of samples whose current output matches the desired value
    pub fn hits<M: Match<L::Desired> + ?Sized>(&self, matcher: &M) -> LearningResult<usize> {
        let mut count = 0;
        for sample in &self.samples {
            let actual = self.learner.output(&sample.input)?;
            if matcher.matches(&actual, &sample.desired) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// One epoch over every sample
    pub fn learn_run(&mut self) -> LearningResult<usize> {
        self.learn_run_with(&AlwaysPick)
    }

    /// One epoch, correcting the learner only on samples the picker accepts.
    ///
    /// Returns the number of corrections made.
    pub fn learn_run_with<P: Picker<L::Desired> + ?Sized>(&mut self, picker: &P) -> LearningResult<usize> {
        let rate = self.config.learning_rate;
        let mut corrected = 0;

        for sample in &self.samples {
            let actual = self.learner.output(&sample.input)?;
            if !picker.pick(sample, &actual) {
                continue;
            }
            let error = sample.desired.residual(&actual)?;
            self.learner.learn(&sample.input, &error, rate)?;
            corrected += 1;
        }

        Ok(corrected)
    }

    /// Mean of `square_error` over the sample set
    pub fn mse<E: SquareError<L::Desired> + ?Sized>(&self, square_error: &E) -> LearningResult<f64> {
        if self.samples.is_empty() {
            return Err(LearningError::EmptySampleSet);
        }

        let mut total = 0.0;
        for sample in &self.samples {
            let actual = self.learner.output(&sample.input)?;
            total += square_error.square_error(sample, &actual);
        }

        Ok(total / self.samples.len() as f64)
    }

    /// Runs full epochs until every sample is a hit or `max_epochs` is reached
    pub fn train_until_hits<M: Match<L::Desired> + ?Sized>(&mut self, matcher: &M) -> LearningResult<EpochReport> {
        if self.samples.is_empty() {
            return Err(LearningError::EmptySampleSet);
        }

        let total = self.samples.len();
        let mut hits = self.hits(matcher)?;
        let mut epochs = 0;

        while hits < total && epochs < self.config.max_epochs {
            self.learn_run()?;
            epochs += 1;
            hits = self.hits(matcher)?;
            tracing::debug!(epoch = epochs, hits, total, "epoch finished");
        }

        let converged = hits == total;
        if !converged {
            tracing::warn!(epochs, hits, total, "training stopped before every sample matched");
        }

        Ok(EpochReport { epochs, hits: Some(hits), mse: None, converged })
    }

    /// Runs picker-filtered epochs until two consecutive epochs end with
    /// `mse < tolerance`, or `max_epochs` is reached
    pub fn train_until_mse<E, P>(&mut self, square_error: &E, picker: &P, tolerance: f64) -> LearningResult<EpochReport>
    where
        E: SquareError<L::Desired> + ?Sized,
        P: Picker<L::Desired> + ?Sized,
    {
        let mut mse = self.mse(square_error)?;
        let mut epochs = 0;
        let (mut previous_bad, mut current_bad) = (true, true);

        while (previous_bad || current_bad) && epochs < self.config.max_epochs {
            previous_bad = current_bad;
            let corrected = self.learn_run_with(picker)?;
            epochs += 1;
            mse = self.mse(square_error)?;
            current_bad = mse >= tolerance;
            tracing::debug!(epoch = epochs, corrected, mse, "epoch finished");
        }

        let converged = !(previous_bad || current_bad);
        if !converged {
            tracing::warn!(epochs, mse, tolerance, "training stopped above the MSE tolerance");
        }

        Ok(EpochReport { epochs, hits: None, mse: Some(mse), converged })
    }
}
