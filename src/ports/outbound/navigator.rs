/// Navigator port for view-initiated navigation
///
/// Views hold a navigator to request a URL change; the app shell decides
/// when the request is acted upon.
pub trait Navigator: Send + Sync {
    /// Requests navigation to an absolute in-app URL such as `/bills/5`
    fn navigate_by_url(&self, url: &str);
}
