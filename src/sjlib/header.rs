/// Which of the reference's `##INFO` definitions make it into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSelection {
    All,
    /// Keep definitions whose (unprefixed) ID is listed
    AllowList(Vec<String>),
    /// Positional slice of the collected definitions. A negative `end` counts
    /// back from the last one, `None` runs to the end.
    Window { start: usize, end: Option<isize> },
}

/// Rename the INFO ID of a header definition by replacing the first `ID=`
pub fn namespace_info_line(line: &str, prefix: &str) -> String {
    line.replacen("ID=", &format!("ID={}", prefix), 1)
}

/// The ID of a `##INFO=<ID=...,>` definition
pub fn info_id(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##INFO=<ID=")?;
    rest.split(|c: char| c == ',' || c == '>').next()
}

/// Accumulates the reference's INFO definitions while it is being read
#[derive(Debug, Default)]
pub struct HeaderCollector {
    lines: Vec<(String, String)>,
}

impl HeaderCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference header line. Only `##INFO` lines are collected;
    /// returns whether the line was taken.
    pub fn push(&mut self, line: &str, prefix: &str) -> bool {
        match info_id(line) {
            Some(id) => {
                self.lines
                    .push((id.to_string(), namespace_info_line(line, prefix)));
                true
            }
            None => false,
        }
    }

    pub fn finish(self, selection: &HeaderSelection) -> Vec<String> {
        match selection {
            HeaderSelection::All => self.lines.into_iter().map(|(_, l)| l).collect(),
            HeaderSelection::AllowList(ids) => self
                .lines
                .into_iter()
                .filter(|(id, _)| ids.iter().any(|i| i == id))
                .map(|(_, l)| l)
                .collect(),
            HeaderSelection::Window { start, end } => {
                let len = self.lines.len() as isize;
                let stop = match end {
                    Some(e) if *e < 0 => (len + e).max(0),
                    Some(e) => (*e).min(len),
                    None => len,
                };
                let stop = stop as usize;
                self.lines
                    .into_iter()
                    .skip(*start)
                    .take(stop.saturating_sub(*start))
                    .map(|(_, l)| l)
                    .collect()
            }
        }
    }
}
