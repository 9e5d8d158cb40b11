// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Statistics collected during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Number of feasibility scans the bisection ran.
    pub probes: u64,
    /// Plots visited across all scans, after early exits.
    pub plots_scanned: u64,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl SearchStatistics {
    /// Records one scan that visited `plots_scanned` plots.
    #[inline]
    pub fn record_probe(&mut self, plots_scanned: usize) {
        self.probes += 1;
        self.plots_scanned = self.plots_scanned.saturating_add(plots_scanned as u64);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Probes: {}", self.probes)?;
        writeln!(f, "  Plots Scanned: {}", self.plots_scanned)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatisticsBuilder {
    probes: u64,
    plots_scanned: u64,
    solve_duration: std::time::Duration,
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with zeroed counters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of probes.
    #[inline]
    pub fn probes(mut self, probes: u64) -> Self {
        self.probes = probes;
        self
    }

    /// Sets the number of plots scanned.
    #[inline]
    pub fn plots_scanned(mut self, plots_scanned: u64) -> Self {
        self.plots_scanned = plots_scanned;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            probes: self.probes,
            plots_scanned: self.plots_scanned,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SearchStatisticsBuilder::new()
            .probes(4)
            .plots_scanned(37)
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.probes, 4);
        assert_eq!(stats.plots_scanned, 37);
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_record_probe_accumulates() {
        let mut stats = SearchStatistics::default();
        stats.record_probe(10);
        stats.record_probe(3);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.plots_scanned, 13);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SearchStatisticsBuilder::new()
            .probes(2)
            .plots_scanned(20)
            .solve_duration(Duration::from_millis(1234))
            .build();

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Search Statistics:"), "missing header");
        assert!(rendered.contains("Probes: 2"), "missing probes");
        assert!(rendered.contains("Plots Scanned: 20"), "missing plots_scanned");
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }

    #[test]
    fn test_display_handles_zero_values() {
        let rendered = format!("{}", SearchStatistics::default());
        assert!(rendered.contains("Probes: 0"));
        assert!(rendered.contains("Plots Scanned: 0"));
        assert!(rendered.contains("Solve Duration (secs): 0.000"));
    }
}
