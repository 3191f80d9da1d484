use std::collections::HashMap;

/// Where a request should be routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `/`: list the storage root
    Root,
    /// Anything else: serve the named file
    Resource(String),
}

/// A parsed request head.
///
/// Only `target` drives behavior. The method, version and header fields are
/// kept for logging and are otherwise ignored; every request is served as GET.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method token, verbatim (e.g. "GET")
    pub method: String,
    /// Request target, verbatim (e.g. "/a.txt")
    pub target: String,
    /// Protocol token, empty when the request line had only two tokens
    pub version: String,
    /// Header fields as key-value pairs
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .map(|v| v.as_str())
    }

    /// Classifies the target for routing.
    ///
    /// Exactly one leading `/` is stripped to form the resource name. No
    /// decoding or normalization happens, so `..` segments pass through.
    ///
    /// ```
    /// # use filestash::http::request::{Request, Target};
    /// # use std::collections::HashMap;
    /// let req = Request {
    ///     method: "GET".into(),
    ///     target: "/a.txt".into(),
    ///     version: "HTTP/1.1".into(),
    ///     headers: HashMap::new(),
    /// };
    /// assert_eq!(req.route(), Target::Resource("a.txt".into()));
    /// ```
    pub fn route(&self) -> Target {
        if self.target == "/" {
            return Target::Root;
        }
        let name = self
            .target
            .strip_prefix('/')
            .unwrap_or(&self.target);
        Target::Resource(name.to_string())
    }
}
