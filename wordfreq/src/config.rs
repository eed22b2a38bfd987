use crate::error::{PipelineError, PipelineResult};

pub const DEFAULT_CHUNK_SIZE: usize = 10_000;
pub const DEFAULT_TOP_N: usize = 10;

/// Tuning knobs for one pipeline run.
///
/// `chunk_size` trades memory for parallelism granularity, `top_n` sizes the
/// ranked output, and `parallelism` bounds how many map tasks run at once.
/// Nothing here is process-global: two pipelines with different settings can
/// coexist, and tests pin `parallelism` to one for sequential runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Characters of text handed to each map task.
    pub chunk_size: usize,
    /// Number of ranked entries to produce.
    pub top_n: usize,
    /// Upper bound on concurrently running map tasks.
    pub parallelism: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            top_n: DEFAULT_TOP_N,
            parallelism: default_parallelism(),
        }
    }
}

impl PipelineConfig {
    /// Rejects any zero-valued knob. Called by [`Pipeline::new`] so a bad
    /// value fails construction instead of surfacing mid-run.
    ///
    /// [`Pipeline::new`]: crate::Pipeline::new
    pub fn validate(&self) -> PipelineResult<()> {
        ensure_positive("chunk_size", self.chunk_size)?;
        ensure_positive("top_n", self.top_n)?;
        ensure_positive("parallelism", self.parallelism)?;
        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: usize) -> PipelineResult<()> {
    if value == 0 {
        return Err(PipelineError::InvalidConfig { field, value });
    }
    Ok(())
}

/// Map-task concurrency used when the caller does not choose one: the
/// host's available processing units, or 4 if that cannot be determined.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.chunk_size, 10_000);
        assert_eq!(config.top_n, 10);
        assert!(config.parallelism >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let config = PipelineConfig {
            chunk_size: 0,
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidConfig {
                field: "chunk_size",
                value: 0
            }
        ));
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let config = PipelineConfig {
            top_n: 0,
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidConfig { field: "top_n", .. }
        ));
    }

    #[test]
    fn zero_parallelism_is_rejected() {
        let config = PipelineConfig {
            parallelism: 0,
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidConfig {
                field: "parallelism",
                ..
            }
        ));
    }
}
