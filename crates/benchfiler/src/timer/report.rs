use std::fmt;

/// Summary of one measurement cycle, in whole microseconds.
///
/// `Display` renders the fixed three-field text block that log scrapers
/// depend on; do not reorder or relabel the lines.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    pub label: String,
    pub avg_micros: u64,
    pub fastest_micros: u64,
    pub samples: u64,
    /// The cycle hit the overflow latch; samples after that point were dropped.
    pub saturated: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} report", self.label)?;
        writeln!(f, "    avg (micros):     {}", self.avg_micros)?;
        writeln!(f, "    fastest (micros): {}", self.fastest_micros)?;
        write!(f, "    hit count:        {}", self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_layout() {
        let report = Report {
            label: "physics".into(),
            avg_micros: 11,
            fastest_micros: 5,
            samples: 3,
            saturated: false,
        };
        assert_eq!(
            report.to_string(),
            "physics report\n    avg (micros):     11\n    fastest (micros): 5\n    hit count:        3"
        );
    }

    #[test]
    fn saturation_is_not_rendered() {
        let mut report = Report {
            label: "x".into(),
            avg_micros: 1,
            fastest_micros: 1,
            samples: 1,
            saturated: false,
        };
        let plain = report.to_string();
        report.saturated = true;
        assert_eq!(report.to_string(), plain);
    }
}
