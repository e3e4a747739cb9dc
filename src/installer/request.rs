//! Package requests.

/// A desired system package plus ordered fallback alternatives.
///
/// Fallbacks cover naming drift between distributions (e.g. `python3-pip`
/// on current Debian, `python-pip` on older releases). Candidates are
/// attempted strictly in order and the chain stops at the first success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Primary package name.
    pub name: String,
    /// Alternative names tried in order after `name` fails.
    pub fallbacks: Vec<String>,
    /// Executable whose presence proves the package is installed, when it
    /// differs from the package name (e.g. `python3-pip` provides `pip3`).
    pub provides: Option<String>,
    /// Whether a failure aborts the whole bootstrap.
    pub required: bool,
}

impl PackageRequest {
    /// A required package.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fallbacks: Vec::new(),
            provides: None,
            required: true,
        }
    }

    /// An optional package: failure is logged and skipped.
    pub fn optional(name: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// Add fallback names, tried in the given order.
    pub fn with_fallbacks(mut self, names: &[&str]) -> Self {
        self.fallbacks = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the executable that proves presence.
    pub fn provides(mut self, executable: &str) -> Self {
        self.provides = Some(executable.to_string());
        self
    }

    /// All candidate names in attempt order: primary first, then fallbacks.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.fallbacks.iter().map(|s| s.as_str()))
    }

    /// The executable checked for presence.
    pub fn presence_check(&self) -> &str {
        self.provides.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_ordered() {
        let request = PackageRequest::required("python3-pip").with_fallbacks(&["python-pip"]);
        let candidates: Vec<_> = request.candidates().collect();
        assert_eq!(candidates, vec!["python3-pip", "python-pip"]);
    }

    #[test]
    fn candidates_without_fallbacks() {
        let request = PackageRequest::required("git");
        let candidates: Vec<_> = request.candidates().collect();
        assert_eq!(candidates, vec!["git"]);
    }

    #[test]
    fn required_and_optional_flags() {
        assert!(PackageRequest::required("git").required);
        assert!(!PackageRequest::optional("jq").required);
    }

    #[test]
    fn presence_check_prefers_provides() {
        let request = PackageRequest::required("python3-pip").provides("pip3");
        assert_eq!(request.presence_check(), "pip3");

        let plain = PackageRequest::required("git");
        assert_eq!(plain.presence_check(), "git");
    }
}
