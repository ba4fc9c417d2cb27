//! Screen and focus types.

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Chat,
    Community,
    Wellness,
}

/// Which wellness control receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WellnessFocus {
    #[default]
    Mood,
    Note,
}

impl WellnessFocus {
    pub fn toggled(self) -> Self {
        match self {
            WellnessFocus::Mood => WellnessFocus::Note,
            WellnessFocus::Note => WellnessFocus::Mood,
        }
    }
}

/// Identity of one mounted view.
///
/// Every mount gets a fresh id, so responses addressed to an earlier mount
/// can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewInstance(pub(crate) u64);

impl std::fmt::Display for ViewInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view#{}", self.0)
    }
}
