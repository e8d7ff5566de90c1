use std::time::Duration;

/// Days covered by a run when no explicit window is configured.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Upper bound on a single weeks-API request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum characters per physical DESCRIPTION line before folding.
pub const FOLD_WIDTH: usize = 70;
