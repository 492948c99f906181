// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use tracing::info;

// Local Crate Imports
use crate::BatchReport;

impl BatchReport {
    /// Summarises a batch of `total` sequences, where those at `corrupt` indices failed validation
    pub fn new(total: usize, corrupt: impl IntoIterator<Item = usize>) -> Self {
        let corrupt = corrupt.into_iter().collect();
        Self { total, corrupt }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.total - self.corrupt.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.corrupt.len()
    }

    /// One `+` for every sequence that was processed, and one `-` for every corrupt one, in batch order
    #[must_use]
    pub fn markers(&self) -> String {
        let mut markers = vec!['+'; self.total];
        for &index in &self.corrupt {
            if let Some(marker) = markers.get_mut(index) {
                *marker = '-';
            }
        }
        markers.into_iter().collect()
    }

    /// Logs every line of the report at the `INFO` level, as one event per line
    ///
    /// The blank line separating the markers from the totals is skipped, so no empty events are logged.
    pub fn emit(&self) {
        for line in self.to_string().lines().filter(|line| !line.is_empty()) {
            info!("{line}");
        }
    }
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.corrupt.is_empty() {
            return write!(f, "All {} sequence(s) processed successfully", self.total);
        }

        writeln!(f, "Processing result: [{}]", self.markers())?;
        writeln!(f)?;
        writeln!(
            f,
            "{} sequence(s) out of {} given have been processed successfully.",
            self.succeeded(),
            self.total
        )?;
        write!(
            f,
            "{} has been recognized as corrupted, i.e. non-protein",
            self.failed()
        )
    }
}
