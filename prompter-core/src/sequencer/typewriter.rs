/// Character-by-character reveal at a fixed per-character delay.
///
/// The revealed prefix is appended into the caller's text buffer, so
/// cancellation stops future insertions without touching characters that
/// are already on screen. Starting a new reveal replaces the task state
/// wholesale; at most one is alive per sequencer.
#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    delay: f32,
    acc: f32,
    active: bool,
}

impl Typewriter {
    pub fn start(&mut self, text: &str, delay: f32) {
        self.chars = text.chars().collect();
        self.revealed = 0;
        self.delay = delay.max(0.0);
        self.acc = 0.0;
        self.active = !self.chars.is_empty();
    }

    /// Advances by one frame, appending any newly revealed characters.
    pub fn tick(&mut self, dt: f32, out: &mut String) {
        if !self.active {
            return;
        }

        self.acc += dt;
        while self.acc >= self.delay && self.revealed < self.chars.len() {
            self.acc -= self.delay;
            out.push(self.chars[self.revealed]);
            self.revealed += 1;
        }

        if self.revealed >= self.chars.len() {
            self.active = false;
        }
    }

    /// Fast-forward: fills the buffer with the rest of the line at once.
    pub fn skip(&mut self, out: &mut String) {
        while self.revealed < self.chars.len() {
            out.push(self.chars[self.revealed]);
            self.revealed += 1;
        }
        self.active = false;
    }

    /// Cooperative cancellation; already-revealed characters stay put.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
