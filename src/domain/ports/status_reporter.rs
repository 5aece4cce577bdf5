/// Port for user-facing status lines.
///
/// The propagator reports each decision here before acting on it, so a
/// line is visible even when the write that follows fails.
pub trait StatusReporter: Send + Sync {
    fn report(&self, line: &str);
}

impl<T: StatusReporter + ?Sized> StatusReporter for &T {
    fn report(&self, line: &str) {
        (**self).report(line);
    }
}
