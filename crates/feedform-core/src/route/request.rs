//! Deep-link request carrying a string-encoded route.

use super::RouteDescriptor;

/// The parameters a form is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub route: RouteDescriptor,
    pub route_prefix: String,
    /// Display name of the source namespace (e.g. "GitHub").
    pub name: String,
}

impl RouteRequest {
    /// Decodes a request. Returns `None` when the route is missing or
    /// malformed or the prefix is empty; callers treat that as "nothing to
    /// show" and dismiss.
    pub fn parse(route: Option<&str>, route_prefix: Option<&str>, name: Option<&str>) -> Option<Self> {
        let payload = route?;
        let route = match RouteDescriptor::from_json(payload) {
            Ok(route) => route,
            Err(err) => {
                tracing::warn!(%err, "dropping route request");
                return None;
            }
        };
        let route_prefix = route_prefix.filter(|p| !p.is_empty())?;
        Some(Self {
            route,
            route_prefix: route_prefix.to_string(),
            name: name.unwrap_or_default().to_string(),
        })
    }
}
