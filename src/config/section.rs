//! Tracks which brace-delimited section the current line belongs to.
//!
//! Nesting is flattened to a single level: any `}` returns to the top level
//! no matter how the section was entered. The configuration files this reads
//! keep animation declarations at most one level deep.

use tracing::trace;

/// Keyword that opens the section holding animation declarations
pub const ANIMATIONS_SECTION: &str = "animations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    #[default]
    TopLevel,
    InAnimations,
    InOtherSection,
}

/// What the tracker decided about a normalised line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// Section opener or closer; nothing else to do
    Consumed,
    /// Line sits inside an unrelated section
    Ignored,
    /// Line may hold a bezier or animation declaration
    Candidate,
}

#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    state: SectionState,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Feed one normalised, non-empty line through the state machine
    pub fn observe(&mut self, line: &str) -> LineDisposition {
        if line.ends_with('{') {
            self.state = if line.starts_with(ANIMATIONS_SECTION) {
                SectionState::InAnimations
            } else {
                SectionState::InOtherSection
            };
            trace!(state = ?self.state, "Entered section");
            return LineDisposition::Consumed;
        }

        if line == "}" {
            self.state = SectionState::TopLevel;
            trace!("Returned to top level");
            return LineDisposition::Consumed;
        }

        match self.state {
            SectionState::TopLevel | SectionState::InAnimations => LineDisposition::Candidate,
            SectionState::InOtherSection => LineDisposition::Ignored,
        }
    }
}
