//! Lightweight peak tracking hooks for buffered element counts.
//!
//! Keep this optional and cheap. Downstream can wire to OpenTelemetry/Prom if desired.

#[derive(Debug, Default, Clone)]
pub struct PeakTracker {
    tag: &'static str,
    peak: usize,
}

impl PeakTracker {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, peak: 0 }
    }

    /// Record a new "buffered elements" value; updates peak if higher.
    pub fn record(&mut self, len: usize) {
        if len > self.peak {
            self.peak = len;
            #[cfg(feature = "tracing")]
            tracing::trace!(tag = self.tag, peak = self.peak, "buffer peak");
        }
    }

    pub fn peak(&self) -> usize {
        self.peak
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_only_grows() {
        let mut t = PeakTracker::new("test");
        t.record(3);
        t.record(1);
        t.record(5);
        t.record(4);
        assert_eq!(t.peak(), 5);
        assert_eq!(t.tag(), "test");
    }
}
