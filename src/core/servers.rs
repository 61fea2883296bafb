use crate::error::MatchingError;

/// Operation-level base URL selection
///
/// A custom base URL wins over the declared servers; the declared servers
/// are indexed by `host_index`. When neither is set the client's own base
/// path applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSelection {
    pub custom_base_url: Option<String>,
    pub servers: Vec<String>,
    pub host_index: usize,
}

impl ServerSelection {
    pub fn with_custom_base_url(mut self, url: impl Into<String>) -> Self {
        self.custom_base_url = Some(url.into());
        self
    }

    pub fn with_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.servers = servers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_host_index(mut self, host_index: usize) -> Self {
        self.host_index = host_index;
        self
    }

    /// Base path chosen for the operation, or `None` to fall back to the
    /// client's base path
    ///
    /// Fails when servers are declared but `host_index` points past them.
    pub fn resolve(&self) -> Result<Option<&str>, MatchingError> {
        if let Some(custom) = self.custom_base_url.as_deref() {
            return Ok(Some(custom));
        }

        if self.servers.is_empty() {
            return Ok(None);
        }

        self.servers
            .get(self.host_index)
            .map(|s| Some(s.as_str()))
            .ok_or_else(|| {
                MatchingError::InvalidConfig(format!(
                    "host index {} out of range for {} declared servers",
                    self.host_index,
                    self.servers.len()
                ))
            })
    }
}
