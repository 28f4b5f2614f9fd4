use crate::conditional::Channels;

/// Behaviour toggles carried by literal path segments.
///
/// A flag is on when `/<name>/` occurs anywhere in the path, so segment order
/// and surrounding text do not matter: `/a/etag/b/static/` and
/// `/static/etag/` enable the same flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFlags {
    /// `static`: pin the version to the sentinel.
    pub is_static: bool,
    /// `etag`: enable entity-tag validation.
    pub etag: bool,
    /// `lastmod`: enable Last-Modified validation.
    pub lastmod: bool,
    /// `headers`: echo request headers into the body.
    pub headers: bool,
    /// `clock`: accept explicit mutation via PUT.
    pub clock: bool,
    /// `periodic`: rolls over with the clock only. This is the default
    /// behaviour; the flag just marks the path as a resource.
    pub periodic: bool,
}

impl PathFlags {
    pub fn from_path(path: &str) -> Self {
        let has = |name: &str| path.contains(&format!("/{}/", name));
        Self {
            is_static: has("static"),
            etag: has("etag"),
            lastmod: has("lastmod"),
            headers: has("headers"),
            clock: has("clock"),
            periodic: has("periodic"),
        }
    }

    /// Whether the path names a resource at all. Paths without any flag
    /// are unknown to the server.
    pub fn is_resource(&self) -> bool {
        self.is_static || self.etag || self.lastmod || self.headers || self.clock || self.periodic
    }

    /// Whether PUT may advance this resource's version.
    pub fn accepts_mutation(&self) -> bool {
        self.clock && !self.is_static
    }

    pub fn channels(&self) -> Channels {
        Channels {
            etag: self.etag,
            last_modified: self.lastmod,
        }
    }
}
