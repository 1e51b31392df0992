/// ProgressReporter port for user-facing progress lines
///
/// Output goes to the user, not to the diagnostic log; implementations
/// typically write to stderr so stdout stays clean for artifacts.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a list of brands
    ///
    /// # Arguments
    /// * `current` - Brands finished so far
    /// * `total` - Brands in this run
    /// * `message` - Optional message to include
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
