/// Absolute station tolerance (m) when projecting a world point onto a reference line.
pub const REF_LINE_MATCH_TOLERANCE: f64 = 1e-6;

/// Slack (m) allowed when a reference line is shorter than its road.
pub const REF_LINE_LENGTH_TOLERANCE: f64 = 1e-6;

/// Upper bound on stations produced for one sampled interval.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Default station step (m) when sampling lane borders and reference lines.
pub const DEFAULT_SAMPLE_STEP: f64 = 0.5;

/// Default RDP tolerance (m) for reference-line polylines.
pub const DEFAULT_SIMPLIFY_EPSILON: f64 = 0.01;

/// Bounding-box samples per full turn of an arc geometry.
pub const ARC_BBOX_SAMPLES_PER_TURN: f64 = 64.0;

/// Curvatures below this magnitude (1/m) are evaluated as straight lines.
pub const MIN_ARC_CURVATURE: f64 = 1e-12;
