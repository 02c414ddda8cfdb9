use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Metrics for one pass through the catalog search pipeline
///
/// Tracks stage timings and result counts for observability; reported
/// through the logger, never persisted.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    /// Total duration of the entire pipeline
    pub total_duration: Duration,

    /// Duration of each stage by name
    pub stage_durations: HashMap<String, Duration>,

    /// Number of candidate records entering the pipeline
    pub input_count: usize,

    /// Number of records matched by exact identifier lookup
    pub identifier_hits: usize,

    /// Number of records returned to the caller
    pub output_count: usize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            total_duration: Duration::ZERO,
            stage_durations: HashMap::new(),
            input_count: 0,
            identifier_hits: 0,
            output_count: 0,
        }
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "=== Search Pipeline Metrics ===".to_string(),
            format!("Total Duration: {:.2}ms", self.total_duration.as_secs_f64() * 1000.0),
            format!("Input Count: {}", self.input_count),
            format!("Identifier Hits: {}", self.identifier_hits),
            format!("Output Count: {}", self.output_count),
            "Stage Durations:".to_string(),
        ];

        let mut stages: Vec<_> = self.stage_durations.iter().collect();
        stages.sort_by(|a, b| b.1.cmp(a.1));
        for (name, duration) in stages {
            lines.push(format!(
                "  {}: {:.2}ms",
                name,
                duration.as_secs_f64() * 1000.0
            ));
        }

        lines.join("\n")
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Incrementally assembles [`PipelineMetrics`] while the pipeline runs
pub struct MetricsBuilder {
    metrics: PipelineMetrics,
    pipeline_start: Option<Instant>,
}

impl MetricsBuilder {
    pub fn new() -> Self {
        Self {
            metrics: PipelineMetrics::new(),
            pipeline_start: None,
        }
    }

    pub fn start_pipeline(&mut self) {
        self.pipeline_start = Some(Instant::now());
    }

    pub fn input_count(&mut self, count: usize) {
        self.metrics.input_count = count;
    }

    pub fn identifier_hits(&mut self, count: usize) {
        self.metrics.identifier_hits = count;
    }

    pub fn output_count(&mut self, count: usize) {
        self.metrics.output_count = count;
    }

    pub fn stage_duration(&mut self, stage: &str, duration: Duration) {
        self.metrics
            .stage_durations
            .insert(stage.to_string(), duration);
    }

    pub fn finish(mut self) -> PipelineMetrics {
        if let Some(start) = self.pipeline_start {
            self.metrics.total_duration = start.elapsed();
        }
        self.metrics
    }
}

impl Default for MetricsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Times a single pipeline stage
pub struct StageTimer {
    stage: &'static str,
    start: Instant,
}

impl StageTimer {
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn stop(self, builder: &mut MetricsBuilder) {
        builder.stage_duration(self.stage, self.start.elapsed());
    }
}
