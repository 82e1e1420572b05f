//! Probe observation.
//!
//! Every algorithm reports each index it inspects to a [`ProbeSink`]. The
//! plain query methods pass [`NoProbe`], which compiles away; audited queries
//! pass a [`ProbeLog`] and publish the probe sequence in their report.

/// Receiver for probed indices.
pub trait ProbeSink {
    /// Record that `index` was inspected.
    fn probe(&mut self, index: usize);
}

/// Discards every probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl ProbeSink for NoProbe {
    #[inline]
    fn probe(&mut self, _index: usize) {}
}

/// Records probes in the order they happen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeLog {
    indices: Vec<usize>,
}

impl ProbeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probed indices, in order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of probes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing was probed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Consume the log, returning the probed indices.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl ProbeSink for ProbeLog {
    fn probe(&mut self, index: usize) {
        self.indices.push(index);
    }
}
