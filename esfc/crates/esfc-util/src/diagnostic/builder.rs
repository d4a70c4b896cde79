//! Optional detail attached to a raised message.

/// Optional information for [`Handler::raise`](super::Handler::raise)
///
/// Built fluently; every field defaults to "not provided".
///
/// # Examples
///
/// ```
/// use esfc_util::diagnostic::RaiseOptions;
///
/// let options = RaiseOptions::new()
///     .actual(Some('\''))
///     .expected(["\""])
///     .rule_id("string");
///
/// assert_eq!(options.actual.as_deref(), Some("'"));
/// assert_eq!(options.expected, Some(vec!["\"".to_string()]));
/// assert!(!options.fatal);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RaiseOptions {
    /// What was found instead
    pub actual: Option<String>,
    /// What would have been accepted
    pub expected: Option<Vec<String>>,
    /// Whether the message is an error
    pub fatal: bool,
    /// Category of the message
    pub rule_id: Option<String>,
}

impl RaiseOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set what was found; `None` means end of file
    pub fn actual(mut self, actual: Option<impl ToString>) -> Self {
        self.actual = actual.map(|value| value.to_string());
        self
    }

    /// Set the accepted alternatives
    pub fn expected<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = Some(expected.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the message as fatal
    pub fn fatal(mut self, fatal: bool) -> Self {
        self.fatal = fatal;
        self
    }

    /// Set the rule id
    pub fn rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }
}
