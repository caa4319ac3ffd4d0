//! Benchmark metrics: data collected during a run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Number of frames processed.
    pub frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Maximum frame time (seconds).
    pub max_frame_time: f64,
    /// Grounded/airborne notifications emitted.
    pub grounded_transitions: u32,
    /// Authority changes emitted.
    pub authority_switches: u32,
    /// Authority after the last frame.
    pub final_authority: String,
    pub final_grounded: bool,
    /// Floor anchor height after the last frame (0 without an offset).
    pub final_floor_height: f32,
    /// Source height above the floor anchor after the last frame.
    pub final_source_height: f32,
    /// Largest fall of the controller below its starting height (meters).
    pub max_drop: f32,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,frames,total_wall_time_s,avg_frame_us,max_frame_us,grounded_transitions,authority_switches,final_authority,final_grounded,final_floor_height,final_source_height,max_drop".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.2},{:.2},{},{},{},{},{:.4},{:.4},{:.4}",
            self.scenario,
            self.frames,
            self.total_wall_time,
            self.avg_frame_time * 1e6,
            self.max_frame_time * 1e6,
            self.grounded_transitions,
            self.authority_switches,
            self.final_authority,
            self.final_grounded,
            self.final_floor_height,
            self.final_source_height,
            self.max_drop,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
