use nurdsem::app::Outcome;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// Render the end-of-run message, plus counts and timing when `verbose`.
pub fn render(outcome: &Outcome, verbose: bool, color: bool) -> String {
    let palette = ansi::Palette::new(color);
    let mut lines = vec![palette.bold(palette.paint("Nurdsem Ragesum complete!", ansi::GREEN))];

    if !outcome.paths.writes_stdout() {
        lines.push(format!(
            "Transformed file saved to: {}",
            palette.paint(outcome.paths.output.display().to_string(), ansi::CYAN)
        ));
    }

    if verbose {
        lines.push(palette.paint("━━━ Run ━━━", ansi::GRAY));
        lines.push(format!(
            "  Words: {}  │  Wraps: {}  │  Bytes: {} → {}",
            palette.paint(outcome.tokens.to_string(), ansi::GREEN),
            palette.paint(outcome.wraps.to_string(), ansi::CYAN),
            outcome.bytes_in,
            outcome.bytes_out,
        ));
        if outcome.soft_failures > 0 {
            lines.push(palette.paint(
                format!("  {} word(s) kept unchanged (case mapping failed)", outcome.soft_failures),
                ansi::YELLOW,
            ));
        }
        lines.push(format!("  Elapsed: {}", palette.dim(format!("{:?}", outcome.elapsed))));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurdsem::app::ResolvedPaths;
    use std::time::Duration;

    fn outcome(output: &str) -> Outcome {
        Outcome {
            paths: ResolvedPaths { input: "in.txt".into(), output: output.into() },
            tokens: 12,
            wraps: 0,
            soft_failures: 0,
            bytes_in: 80,
            bytes_out: 91,
            elapsed: Duration::from_micros(5),
        }
    }

    #[test]
    fn plain_report_names_destination() {
        let text = render(&outcome("out.txt"), false, false);
        assert_eq!(text, "Nurdsem Ragesum complete!\nTransformed file saved to: out.txt");
    }

    #[test]
    fn stdout_destination_is_not_announced() {
        let text = render(&outcome("-"), false, false);
        assert_eq!(text, "Nurdsem Ragesum complete!");
    }

    #[test]
    fn verbose_report_includes_counts() {
        let mut o = outcome("out.txt");
        o.soft_failures = 1;
        let text = render(&o, true, false);
        assert!(text.contains("Words: 12"));
        assert!(text.contains("Bytes: 80 → 91"));
        assert!(text.contains("1 word(s) kept unchanged"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn color_wraps_in_ansi() {
        let text = render(&outcome("out.txt"), false, true);
        assert!(text.starts_with("\x1b[1m\x1b[32m"));
    }
}
