/// Host configuration for the object store download URLs point at.
#[derive(Clone, Debug)]
pub struct DownloadHost {
    /// Host serving the browser archives.
    pub object: String,
}

impl DownloadHost {
    pub fn new(object: &str) -> Self {
        Self {
            object: object.to_string(),
        }
    }

    /// The production object store.
    pub fn current() -> Self {
        Self {
            object: "https://storage.googleapis.com".to_string(),
        }
    }
}

impl Default for DownloadHost {
    fn default() -> Self {
        Self::current()
    }
}

impl From<&str> for DownloadHost {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

impl From<String> for DownloadHost {
    fn from(host: String) -> Self {
        Self::new(&host)
    }
}
