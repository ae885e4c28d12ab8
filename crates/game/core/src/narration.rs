//! Linear narration sequence shown before exploration.

/// Result of advancing past the current narration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NarrationStep {
    /// Show the line at this index next.
    Line(usize),
    /// The script is exhausted; exploration begins.
    Complete,
}

/// Advances from `index` in a script of `len` lines.
pub fn advance_narration(index: usize, len: usize) -> NarrationStep {
    let next = index.saturating_add(1);
    if next < len {
        NarrationStep::Line(next)
    } else {
        NarrationStep::Complete
    }
}

/// Ordered narration lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NarrationScript {
    lines: Vec<String>,
}

impl NarrationScript {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_then_completes() {
        assert_eq!(advance_narration(0, 4), NarrationStep::Line(1));
        assert_eq!(advance_narration(2, 4), NarrationStep::Line(3));
        assert_eq!(advance_narration(3, 4), NarrationStep::Complete);
    }

    #[test]
    fn empty_or_overrun_script_completes() {
        assert_eq!(advance_narration(0, 0), NarrationStep::Complete);
        assert_eq!(advance_narration(usize::MAX, 4), NarrationStep::Complete);
    }

    #[test]
    fn script_lookup() {
        let script = NarrationScript::new(["one", "two"]);
        assert_eq!(script.line(1), Some("two"));
        assert_eq!(script.line(2), None);
        assert_eq!(script.len(), 2);
    }
}
