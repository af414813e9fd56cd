/// Linear panel-opacity tween, sampled once per frame. At most one alive
/// per sequencer; it runs until the target opacity is reached.
#[derive(Debug, Clone)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advances by one frame and returns the current opacity.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        let t = if self.duration <= f32::EPSILON {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self) -> bool {
        self.duration <= f32::EPSILON || self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
