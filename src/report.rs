//! Reporting sinks
//!
//! Validators and generators hand their user-facing lines to a [`Reporter`]
//! instead of printing directly, so tests can assert on exactly what a user
//! would see.

/// Destination for human-readable outcome lines
pub trait Reporter {
    /// A confirmation line (printed on stdout by the console reporter)
    fn success(&mut self, line: &str);

    /// A diagnostic line (printed on stderr by the console reporter)
    fn problem(&mut self, line: &str);
}

/// Writes successes to stdout and problems to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn success(&mut self, line: &str) {
        println!("✅ {}", line);
    }

    fn problem(&mut self, line: &str) {
        eprintln!("❌ {}", line);
    }
}

/// One captured line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Success(String),
    Problem(String),
}

/// Collects lines in emission order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub lines: Vec<Line>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Success(s) => Some(s.as_str()),
                Line::Problem(_) => None,
            })
            .collect()
    }

    pub fn problems(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Problem(s) => Some(s.as_str()),
                Line::Success(_) => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn success(&mut self, line: &str) {
        self.lines.push(Line::Success(line.to_string()));
    }

    fn problem(&mut self, line: &str) {
        self.lines.push(Line::Problem(line.to_string()));
    }
}

/// Process exit status for an overall verdict
pub fn exit_code(ok: bool) -> i32 {
    if ok {
        0
    } else {
        1
    }
}
