/// The base IRI used when neither a host nor an interface is configured.
pub const DEFAULT_SITE: &str = "http://localhost:3333/";

/// Holds where the data-wrangling host is reachable. Used to derive a default base IRI for new
/// transforms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// The DNS name of the host.
    pub host: Option<String>,
    /// The interface the host binds to. Used when no host name is set.
    pub iface: Option<String>,
    pub port: Option<u16>,
}

impl SiteConfig {
    /// Creates a configuration, treating empty strings as unset.
    pub fn new(host: Option<String>, iface: Option<String>, port: Option<u16>) -> Self {
        Self {
            host: host.filter(|host| !host.is_empty()),
            iface: iface.filter(|iface| !iface.is_empty()),
            port,
        }
    }

    pub fn default_base_iri(&self) -> String {
        let Some(authority) = self.host.as_ref().or(self.iface.as_ref()) else {
            return DEFAULT_SITE.to_owned();
        };
        match self.port {
            Some(port) => format!("http://{authority}:{port}/"),
            None => format!("http://{authority}/"),
        }
    }
}
