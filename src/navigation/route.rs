use std::collections::HashMap;

/// Values captured by `{name}` segments of a route pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: HashMap<String, String>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parses a numeric id parameter.
    pub fn id(&self, name: &str) -> Option<u64> {
        self.get(name)?.parse().ok()
    }
}

type Build<V> = fn(&RouteParams) -> Option<V>;

struct Route<V> {
    segments: Vec<Segment>,
    build: Build<V>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Static mapping from paths to view identifiers.
///
/// Routes are tried in registration order. A path that matches no route, or whose builder
/// rejects the captured parameters, resolves to the fallback view.
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    fallback: V,
}

impl<V: Clone> RouteTable<V> {
    pub fn new(fallback: V) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Registers `pattern`, e.g. `/offers/{id}/edit`.
    ///
    /// `build` turns the captured parameters into a view. Returning `None` (say, for a
    /// non-numeric id) makes the path fall through to the next routes.
    pub fn route(mut self, pattern: &str, build: Build<V>) -> Self {
        let segments = split(pattern)
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(segment.to_string()),
                }
            })
            .collect();

        self.routes.push(Route { segments, build });
        self
    }

    /// Resolves `path`, returning `None` when no route matches.
    pub fn try_resolve(&self, path: &str) -> Option<V> {
        let path = normalize(path);
        let parts: Vec<&str> = split(&path).collect();

        self.routes.iter().find_map(|route| {
            if route.segments.len() != parts.len() {
                return None;
            }

            let mut params = RouteParams::default();
            for (segment, part) in route.segments.iter().zip(&parts) {
                match segment {
                    Segment::Literal(literal) if literal == part => {}
                    Segment::Literal(_) => return None,
                    Segment::Param(name) => {
                        params.values.insert(name.clone(), part.to_string());
                    }
                }
            }

            (route.build)(&params)
        })
    }

    /// Resolves `path`, falling back to the default view.
    pub fn resolve(&self, path: &str) -> V {
        self.try_resolve(path)
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }
}

/// Strips the hash prefix and query string and guarantees a leading `/`.
///
/// `#/offers?x=1` and `offers/` both become `/offers`.
pub fn normalize(path: &str) -> String {
    let path = path.trim().trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let parts: Vec<&str> = split(path).collect();

    format!("/{}", parts.join("/"))
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
