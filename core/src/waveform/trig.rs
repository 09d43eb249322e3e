use crate::prelude::{WaveformGenerator, COSINE_LABEL, SINE_LABEL};

/// `cos(ω·t)` for a fixed angular frequency.
#[derive(Debug, Clone, Copy)]
pub struct Cosine {
    omega: f64,
}

impl Cosine {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }
}

impl WaveformGenerator for Cosine {
    fn label(&self) -> &str {
        COSINE_LABEL
    }

    fn value_at(&self, t: f64) -> f64 {
        (self.omega * t).cos()
    }
}

/// `sin(ω·t)` for a fixed angular frequency.
#[derive(Debug, Clone, Copy)]
pub struct Sine {
    omega: f64,
}

impl Sine {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }
}

impl WaveformGenerator for Sine {
    fn label(&self) -> &str {
        SINE_LABEL
    }

    fn value_at(&self, t: f64) -> f64 {
        (self.omega * t).sin()
    }
}
