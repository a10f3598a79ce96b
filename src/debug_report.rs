use romanum::{Engine, ScanStep, ValidationReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
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
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &ValidationReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Validating: \"{}\"", report.text), ansi::CYAN)));

    // Structural scan trace
    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    print_scan(report, &palette);

    // Result
    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    print_result(report, &palette);

    // Timing
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", report.elapsed), ansi::GREEN));
    println!();
}

fn print_scan(report: &ValidationReport, palette: &ansi::Palette) {
    if report.details.steps.is_empty() {
        println!("{}", palette.dim("  No symbols scanned"));
    }

    for step in &report.details.steps {
        println!("  {}", fmt_step_compact(step, palette));
    }

    if let Some(rejection) = &report.details.rejection {
        let at = report.details.steps.last().map(|s| s.index).unwrap_or(0);
        println!("  {} {}", palette.paint(format!("✗ rejected at [{at}]:"), ansi::YELLOW), palette.bold(rejection.to_string()));
    }
}

fn print_result(report: &ValidationReport, palette: &ansi::Palette) {
    let engine = match report.details.engine {
        Engine::Structural => "structural",
        Engine::Pattern => "pattern",
    };

    match report.value {
        Some(value) => {
            println!(
                "  {} {} {} {}",
                palette.paint("✓", ansi::GREEN),
                palette.bold(palette.paint(&report.text, ansi::GREEN)),
                palette.dim("="),
                palette.bold(value.to_string()),
            );
        }
        None => {
            println!("  {} {}", palette.paint("✗", ansi::YELLOW), palette.paint("not a valid Roman numeral", ansi::YELLOW));
        }
    }
    println!("  {} {}", palette.dim("engine:"), palette.paint(engine, ansi::BLUE));

    let check = &report.details.cross_check;
    if !check.agree() {
        println!(
            "  {} {}",
            palette.paint("⚠ engines disagree:", ansi::YELLOW),
            palette.bold(format!("structural={} pattern={}", check.structural, check.pattern)),
        );
    }
}

fn fmt_step_compact(step: &ScanStep, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {}",
        palette.paint(format!("[{}] {}", step.index, step.symbol), ansi::BLUE),
        palette.paint(format!("{:>4}", step.value), ansi::GREEN),
        palette.dim(format!("run {}  ceiling {}", step.run, step.ceiling)),
    )
}
