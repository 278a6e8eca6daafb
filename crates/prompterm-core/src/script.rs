/// The script text to prompt, read verbatim at session start.
///
/// Playback never mutates the script; blank lines are preserved so the
/// speaker's paragraph breaks survive.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_blank_lines() {
        let s = Script::from_text("one\n\nthree");
        assert_eq!(s.lines(), &["one", "", "three"]);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(Script::from_text("").is_empty());
        assert!(Script::from_text("  \n\t\n").is_empty());
    }
}
