//! Fixed-timestep accumulator.
//!
//! Hosts render at whatever rate they like and call `advance` once per
//! frame; it answers how many physics steps to run. Frame time is clamped to
//! `max_frame_time`, and once `max_steps_per_frame` steps have run the
//! leftover time is discarded so a slow frame cannot snowball.

use crate::config::TimingConfig;

#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: f32,
    max_frame_time: f32,
    max_steps: u32,
    accumulator: f32,
    total_frames: u64,
    total_steps: u64,
}

impl FixedTimestep {
    pub fn new(timing: &TimingConfig) -> Self {
        FixedTimestep {
            step: timing.fixed_timestep,
            max_frame_time: timing.max_frame_time,
            max_steps: timing.max_steps_per_frame,
            accumulator: 0.0,
            total_frames: 0,
            total_steps: 0,
        }
    }

    /// Feed one frame's elapsed time; returns the number of steps to run.
    /// Negative or non-finite frame times count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.total_frames += 1;
        let frame_dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, self.max_frame_time) } else { 0.0 };
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
            if steps >= self.max_steps {
                self.accumulator = 0.0;
                break;
            }
        }
        self.total_steps += steps as u64;
        steps
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
