/// Label shown on the copy control after a successful clipboard write.
pub const COPY_CONFIRMATION: &str = "Copied!";

/// How long the confirmation stays before the label reverts.
pub const COPY_CONFIRMATION_MS: u32 = 2_000;

/// Label of the "copy result" control.
///
/// `confirm` swaps in [`COPY_CONFIRMATION`] and returns a token; `revert` with
/// the latest token restores the label that was showing before. Older tokens
/// are ignored so overlapping confirmations revert once, to the real label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLabel {
    idle: String,
    confirming: Option<u64>,
    generation: u64,
}

impl CopyLabel {
    pub fn new(idle: impl Into<String>) -> Self {
        Self {
            idle: idle.into(),
            confirming: None,
            generation: 0,
        }
    }

    pub fn text(&self) -> &str {
        match self.confirming {
            Some(_) => COPY_CONFIRMATION,
            None => &self.idle,
        }
    }

    pub fn confirm(&mut self) -> u64 {
        self.generation += 1;
        self.confirming = Some(self.generation);
        self.generation
    }

    /// Returns `true` when the label changed.
    pub fn revert(&mut self, token: u64) -> bool {
        if self.confirming == Some(token) {
            self.confirming = None;
            true
        } else {
            false
        }
    }
}
