/// ProgressReporter port for user feedback while a view loads
///
/// This port abstracts progress reporting (e.g., a spinner on stderr)
/// so it doesn't interfere with the rendered output on stdout.
pub trait ProgressReporter {
    /// Signals that loading of the given route has started
    fn start_loading(&self, path: &str);

    /// Signals that loading has settled, successfully or not
    fn finish_loading(&self, message: &str);

    /// Reports a plain status message
    fn report(&self, message: &str);
}
