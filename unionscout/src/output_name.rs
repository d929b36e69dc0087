use std::time::SystemTime;

/// Source of the current wall-clock time, injectable so output names can be
/// tested against a fixed instant.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// The live system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Builds an output filename of the form `<base>-<timestamp>.<extension>`.
///
/// The timestamp is RFC 3339 with millisecond precision, with `':'` and
/// `'.'` replaced by `'-'` so the name is filesystem-portable. Two calls in
/// the same millisecond produce the same name; uniqueness is
/// timestamp-granularity only.
pub fn allocate(base: &str, extension: &str, clock: &dyn Clock) -> String {
    let timestamp = humantime::format_rfc3339_millis(clock.now())
        .to_string()
        .replace(':', "-")
        .replace('.', "-");
    format!("{}-{}.{}", base, timestamp, extension)
}
