//! Directory entries and provider selection

/// Data needed to open a session with a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Service endpoint of the provider (e.g. "grpc://10.0.0.5:50051")
    pub uri: String,

    /// Domain identifiers attached to every call made on the session
    pub domain: Vec<String>,
}

impl ConnectionInfo {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            domain: Vec::new(),
        }
    }

    pub fn with_domain(mut self, domain: Vec<String>) -> Self {
        self.domain = domain;
        self
    }
}

/// One provider as published by the directory.
///
/// Names are the lookup key but the directory does not guarantee they are
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    name: String,
    connection: ConnectionInfo,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>, connection: ConnectionInfo) -> Self {
        Self {
            name: name.into(),
            connection,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &ConnectionInfo {
        &self.connection
    }
}

/// Ordered result of one directory lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderListing {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderListing {
    pub fn new(providers: Vec<ProviderDescriptor>) -> Self {
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProviderDescriptor> {
        self.providers.iter()
    }

    /// Names in listing order, for diagnostics
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(ProviderDescriptor::name).collect()
    }
}

impl FromIterator<ProviderDescriptor> for ProviderListing {
    fn from_iter<I: IntoIterator<Item = ProviderDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProviderListing {
    type Item = &'a ProviderDescriptor;
    type IntoIter = std::slice::Iter<'a, ProviderDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

/// Find the first provider named exactly `target_name`.
///
/// Matching is case-sensitive with no trimming. When several entries share the
/// name, the earliest one in the listing wins.
pub fn select<'a>(listing: &'a ProviderListing, target_name: &str) -> Option<&'a ProviderDescriptor> {
    listing.iter().find(|provider| provider.name() == target_name)
}
