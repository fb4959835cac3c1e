//! Thresholds and sample sizes for timing comparisons

/// Thresholds and sample counts for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Lowest acceptable mean ratio (diagnostic)
    pub mean_ratio_min: f64,
    /// Highest acceptable mean ratio (diagnostic)
    pub mean_ratio_max: f64,
    /// Welch t-statistic above which a difference is reported
    pub t_stat_threshold: f64,
    /// Combined score above which the operation fails
    pub combined_score_threshold: f64,
    /// Untimed calls before measuring
    pub num_warmup: usize,
    /// Timing samples per input class
    pub num_samples: usize,
    /// Calls averaged into one sample
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_min: 0.80,
            mean_ratio_max: 1.25,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    /// Set the acceptable mean ratio range
    pub fn with_mean_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.mean_ratio_min = min;
        self.mean_ratio_max = max;
        self
    }

    /// Set the number of warm-up calls
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    /// Set sample and iteration counts
    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    /// Set the t-statistic threshold
    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    /// Set the combined score threshold
    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per operation
impl TestConfig {
    /// Whole AEAD messages: the MAC and cipher add variance
    pub fn for_aead() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.5)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// Tag verification on matching vs mismatching tags
    pub fn for_tag_compare() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.35)
            .with_t_stat_threshold(1.9)
            .with_combined_score_threshold(1.9)
    }

    /// Poly1305 over fixed-length messages
    pub fn for_mac() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.6)
            .with_t_stat_threshold(1.8)
            .with_combined_score_threshold(2.0)
    }

    /// Keystream generation and HChaCha20
    pub fn for_stream() -> Self {
        Self::default()
            .with_t_stat_threshold(1.7)
            .with_combined_score_threshold(1.8)
    }
}
