//! Timing measurement and Welch's t-test comparison

use super::config::TestConfig;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt::Write as _;
use std::time::Instant;

/// Outcome of comparing two timing distributions
#[derive(Debug, Clone)]
pub struct TimingAnalysis {
    /// Mean ns per call for input class A
    pub mean_a: f64,
    /// Mean ns per call for input class B
    pub mean_b: f64,
    /// Sample standard deviation for class A
    pub std_dev_a: f64,
    /// Sample standard deviation for class B
    pub std_dev_b: f64,
    /// Larger mean over smaller mean, always >= 1
    pub mean_ratio: f64,
    /// Welch t-statistic (absolute)
    pub t_statistic: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Weighted score compared against the configured threshold
    pub combined_score: f64,
    /// Verdict
    pub is_constant_time: bool,
    /// Cohen's d effect size
    pub cohens_d: f64,
    /// 95% interval for the absolute mean difference
    pub confidence_interval: (f64, f64),
}

/// Mean and variance of one cleaned sample set
#[derive(Debug, Clone, Copy)]
struct Summary {
    n: f64,
    mean: f64,
    var: f64,
}

impl Summary {
    fn of(times: &[u128]) -> Self {
        let n = times.len() as f64;
        let mean = times.iter().sum::<u128>() as f64 / n;
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        Self {
            n,
            mean,
            var: ss / (n - 1.0),
        }
    }

    fn std_dev(&self) -> f64 {
        self.var.sqrt()
    }

    fn rel_std_dev(&self) -> f64 {
        self.std_dev() / self.mean
    }
}

/// Measures two closures and decides whether their timings differ
pub struct TimingTester {
    config: TestConfig,
}

impl TimingTester {
    /// Build a tester from a configuration preset
    pub fn new(config: TestConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Average ns per call of `f`, one entry per sample
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<u128> {
        let iterations = self.config.num_iterations.max(1);
        let mut times = Vec::with_capacity(self.config.num_samples);
        for _ in 0..self.config.num_samples {
            let start = Instant::now();
            for _ in 0..iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / iterations as u128);
        }
        times
    }

    /// Warm up, then sample `a` and `b` alternately and analyze the result
    ///
    /// Interleaving keeps frequency scaling and cache effects from landing
    /// on only one class.
    pub fn compare<A: FnMut(), B: FnMut()>(
        &self,
        mut a: A,
        mut b: B,
    ) -> Result<TimingAnalysis, String> {
        for _ in 0..self.config.num_warmup {
            a();
            b();
        }

        let iterations = self.config.num_iterations.max(1);
        let mut times_a = Vec::with_capacity(self.config.num_samples);
        let mut times_b = Vec::with_capacity(self.config.num_samples);
        for _ in 0..self.config.num_samples {
            let start = Instant::now();
            for _ in 0..iterations {
                a();
            }
            times_a.push(start.elapsed().as_nanos() / iterations as u128);

            let start = Instant::now();
            for _ in 0..iterations {
                b();
            }
            times_b.push(start.elapsed().as_nanos() / iterations as u128);
        }

        self.analyze(&times_a, &times_b)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
        times
            .iter()
            .filter(|&&t| (t as f64) >= lo && (t as f64) <= hi)
            .copied()
            .collect()
    }

    /// Two-tailed p-value of `t_stat` under Student's t with `df` degrees
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return Self::fallback_p_value(t_stat);
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => Self::fallback_p_value(t_stat),
        }
    }

    fn fallback_p_value(t_stat: f64) -> f64 {
        match t_stat.abs() {
            t if t < 0.5 => 0.68,
            t if t < 1.0 => 0.45,
            t if t < 1.5 => 0.25,
            t if t < 2.0 => 0.12,
            t if t < 2.5 => 0.05,
            t if t < 3.0 => 0.02,
            _ => 0.01,
        }
    }

    fn t_critical(df: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(0.975),
            Err(_) => 1.96,
        }
    }

    /// Weighted blend of mean ratio, t-statistic and relative spread
    ///
    /// Never below 1.0; identical distributions score close to 1.
    pub fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
        let score =
            1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + max_rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    /// Statistics for two raw sample sets
    pub fn analyze(&self, times_a: &[u128], times_b: &[u128]) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err(format!(
                "too few samples after outlier removal ({} / {})",
                clean_a.len(),
                clean_b.len()
            ));
        }

        let a = Summary::of(&clean_a);
        let b = Summary::of(&clean_b);
        if a.mean <= 0.0 || b.mean <= 0.0 {
            return Err("timer resolution too coarse; raise num_iterations".to_string());
        }

        let mean_ratio = a.mean.max(b.mean) / a.mean.min(b.mean);
        let mean_diff = (a.mean - b.mean).abs();

        // Welch
        let se_a = a.var / a.n;
        let se_b = b.var / b.n;
        let standard_error = (se_a + se_b).sqrt();
        let t_statistic = if standard_error > 0.0 {
            mean_diff / standard_error
        } else {
            0.0
        };
        let degrees_of_freedom =
            (se_a + se_b).powi(2) / (se_a.powi(2) / (a.n - 1.0) + se_b.powi(2) / (b.n - 1.0));
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let pooled = ((a.var * (a.n - 1.0) + b.var * (b.n - 1.0)) / (a.n + b.n - 2.0)).sqrt();
        let cohens_d = if pooled > 0.0 { mean_diff / pooled } else { 0.0 };

        let margin = Self::t_critical(degrees_of_freedom) * standard_error;
        let confidence_interval = ((mean_diff - margin).max(0.0), mean_diff + margin);

        let combined_score = Self::combined_score(
            mean_ratio,
            t_statistic,
            a.rel_std_dev().max(b.rel_std_dev()),
        );

        Ok(TimingAnalysis {
            mean_a: a.mean,
            mean_b: b.mean,
            std_dev_a: a.std_dev(),
            std_dev_b: b.std_dev(),
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            is_constant_time: combined_score <= self.config.combined_score_threshold,
            cohens_d,
            confidence_interval,
        })
    }
}

/// Label for a Cohen's d value
pub fn interpret_effect_size(d: f64) -> &'static str {
    match d {
        d if d < 0.2 => "negligible",
        d if d < 0.5 => "small",
        d if d < 0.8 => "medium",
        d if d < 1.2 => "large",
        _ => "very large",
    }
}

/// Human-readable report for a comparison
///
/// Passing results get a single line; failures list the metrics and the
/// timing patterns they match.
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    operation: &str,
) -> String {
    let mut out = String::new();

    if analysis.is_constant_time {
        let _ = writeln!(
            out,
            "[PASS] {operation}: score {:.3} <= {:.3}",
            analysis.combined_score, config.combined_score_threshold
        );
        return out;
    }

    let mean_diff = (analysis.mean_a - analysis.mean_b).abs();
    let diff_percent = mean_diff / analysis.mean_a.min(analysis.mean_b) * 100.0;
    let rel_a = analysis.std_dev_a / analysis.mean_a;
    let rel_b = analysis.std_dev_b / analysis.mean_b;

    let _ = writeln!(out, "[FAIL] {operation}: timing difference detected");
    let _ = writeln!(
        out,
        "  mean:  {:.0} ns vs {:.0} ns ({diff_percent:.1}%)",
        analysis.mean_a, analysis.mean_b
    );
    let _ = writeln!(
        out,
        "  stats: t={:.2} df={:.1} p={:.2e} d={:.2} ({})",
        analysis.t_statistic,
        analysis.degrees_of_freedom,
        analysis.p_value,
        analysis.cohens_d,
        interpret_effect_size(analysis.cohens_d)
    );
    let _ = writeln!(
        out,
        "  95% CI of difference: [{:.1}, {:.1}] ns",
        analysis.confidence_interval.0, analysis.confidence_interval.1
    );
    let _ = writeln!(
        out,
        "  score: {:.3} > {:.3}",
        analysis.combined_score, config.combined_score_threshold
    );

    let mut matched = false;
    if analysis.mean_ratio > config.mean_ratio_max && analysis.t_statistic > config.t_stat_threshold
    {
        matched = true;
        out.push_str("  pattern: input-dependent branch or early exit\n");
    }
    if rel_a.max(rel_b) / rel_a.min(rel_b) > 4.0 && rel_a.max(rel_b) > 0.1 {
        matched = true;
        out.push_str("  pattern: input-dependent iteration count\n");
    }
    if rel_a < 0.05 && rel_b < 0.05 && analysis.mean_ratio > 1.2 {
        matched = true;
        out.push_str("  pattern: input-dependent memory access\n");
    }
    if !matched {
        out.push_str("  pattern: none recognised; likely measurement noise\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outliers_are_removed() {
        let mut times = vec![100u128; 20];
        times.push(10_000);
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 20);
        assert!(clean.iter().all(|&t| t == 100));
    }

    #[test]
    fn identical_samples_pass() {
        let tester = TimingTester::new(TestConfig::default());
        let a: Vec<u128> = (0..25).map(|i| 1000 + (i % 5)).collect();
        let analysis = tester.analyze(&a, &a).unwrap();
        assert!(analysis.mean_ratio < 1.0001);
        assert!(analysis.t_statistic < 1e-9);
        assert!(analysis.is_constant_time);
        assert!(generate_test_insights(&analysis, tester.config(), "same").starts_with("[PASS]"));
    }

    #[test]
    fn distinct_samples_fail() {
        let tester = TimingTester::new(TestConfig::default());
        let a: Vec<u128> = (0..25).map(|i| 1000 + (i % 5)).collect();
        let b: Vec<u128> = (0..25).map(|i| 3000 + (i % 5)).collect();
        let analysis = tester.analyze(&a, &b).unwrap();
        assert!(analysis.mean_ratio > 2.9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
        let report = generate_test_insights(&analysis, tester.config(), "skewed");
        assert!(report.starts_with("[FAIL]"));
        assert!(report.is_ascii());
    }

    #[test]
    fn too_few_samples_is_an_error() {
        let tester = TimingTester::new(TestConfig::default());
        assert!(tester.analyze(&[1], &[1, 2, 3]).is_err());
    }

    #[test]
    fn p_value_is_bounded() {
        for t in [0.0, 0.5, 2.0, 50.0] {
            let p = TimingTester::p_value(t, 30.0);
            assert!((0.0..=1.0).contains(&p));
        }
        assert!(TimingTester::p_value(0.0, 30.0) > 0.99);
    }
}
