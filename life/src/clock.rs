// clock.rs - Paces generations against elapsed frame time

/// Seconds accumulated since the last completed generation.
///
/// The clock is checked before it is advanced: a frame either finds the
/// threshold already reached and steps, or adds its elapsed time. At most
/// one generation happens per frame however large the elapsed time was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns true when a generation is due this frame, restarting the
    /// clock; otherwise accumulates `elapsed_time` and returns false.
    pub fn tick(&mut self, elapsed_time: f32, threshold: f32) -> bool {
        if self.elapsed >= threshold {
            self.reset();
            true
        } else {
            self.elapsed += elapsed_time;
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
