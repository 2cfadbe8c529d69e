use crate::shared::error::RouteError;

/// A view selected by the route table, with its route parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Customers,
    Products,
    /// `customer_id` is the raw, percent-decoded path segment
    Bills { customer_id: String },
}

/// Result of resolving a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    /// Normalised path that was matched, after any redirect
    pub path: String,
    pub redirected: bool,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Customers,
    Products,
    Bills,
}

struct RouteEntry {
    pattern: &'static str,
    target: Target,
}

/// Pattern table; `:name` segments bind a parameter
const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "customers",
        target: Target::Customers,
    },
    RouteEntry {
        pattern: "products",
        target: Target::Products,
    },
    RouteEntry {
        pattern: "bills/:customerId",
        target: Target::Bills,
    },
];

/// Full-match redirects: (normalised path, destination)
const REDIRECTS: &[(&str, &str)] = &[("", "/customers")];

/// Static mapping from URL path to view
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn new() -> Self {
        Self
    }

    /// Resolves an in-app URL to a route
    ///
    /// Query strings and fragments are ignored, as are empty path segments,
    /// so `/bills//42/` resolves like `/bills/42`.
    ///
    /// # Errors
    /// Returns `RouteError::NotFound` when no pattern matches.
    pub fn resolve(&self, url: &str) -> Result<RouteMatch, RouteError> {
        let normalised = Self::normalise(url);

        if let Some((_, destination)) = REDIRECTS.iter().find(|(from, _)| *from == normalised) {
            tracing::debug!(from = url, to = destination, "Redirecting");
            let mut matched = self.match_path(&Self::normalise(destination), url)?;
            matched.redirected = true;
            return Ok(matched);
        }

        self.match_path(&normalised, url)
    }

    fn normalise(url: &str) -> String {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn match_path(&self, normalised: &str, url: &str) -> Result<RouteMatch, RouteError> {
        let segments: Vec<&str> = if normalised.is_empty() {
            Vec::new()
        } else {
            normalised.split('/').collect()
        };

        for entry in ROUTES {
            if let Some(params) = Self::match_pattern(entry.pattern, &segments, url)? {
                return Ok(RouteMatch {
                    route: Self::build_route(entry.target, params),
                    path: format!("/{}", normalised),
                    redirected: false,
                });
            }
        }

        Err(RouteError::NotFound {
            url: url.to_string(),
        })
    }

    /// Returns the bound parameters if `segments` match `pattern`
    fn match_pattern(
        pattern: &str,
        segments: &[&str],
        url: &str,
    ) -> Result<Option<Vec<(String, String)>>, RouteError> {
        let parts: Vec<&str> = pattern.split('/').collect();
        if parts.len() != segments.len() {
            return Ok(None);
        }

        let mut params = Vec::new();
        for (part, segment) in parts.iter().zip(segments) {
            if let Some(name) = part.strip_prefix(':') {
                let value = urlencoding::decode(segment).map_err(|_| {
                    RouteError::MalformedParameter {
                        url: url.to_string(),
                    }
                })?;
                params.push((name.to_string(), value.into_owned()));
            } else if part != segment {
                return Ok(None);
            }
        }

        Ok(Some(params))
    }

    fn build_route(target: Target, params: Vec<(String, String)>) -> Route {
        match target {
            Target::Customers => Route::Customers,
            Target::Products => Route::Products,
            Target::Bills => Route::Bills {
                customer_id: params
                    .into_iter()
                    .find(|(name, _)| name == "customerId")
                    .map(|(_, value)| value)
                    .unwrap_or_default(),
            },
        }
    }
}
