//! Request sequencing for fetch-then-replace loads.
//!
//! Two overlapping loads may settle out of order. Each load takes a token
//! from a monotonically increasing counter and a response is applied only if
//! its token is newer than the last one applied, so a slow, older response
//! can never overwrite a newer one.

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Decide whether a settled response may be applied, recording it if so.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if token.0 > self.applied && token.0 <= self.issued {
            self.applied = token.0;
            true
        } else {
            false
        }
    }

    /// True while the newest issued token has not been applied or superseded.
    pub fn is_pending(&self) -> bool {
        self.applied < self.issued
    }
}
