//! Route lookup and registration.
//!
//! # Responsibilities
//! - Collect route entries during startup (`RouteTableBuilder`)
//! - Freeze them into an immutable `RouteTable`
//! - Resolve `(method, path)` to the first matching entry
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in registration order; first match wins
//! - Duplicate `(method, pattern)` entries are kept but warned about, the
//!   earlier one always shadows the later one
//! - HEAD falls back to GET routes when no HEAD route matches
//! - Explicit `NotFound` rather than a silent default

use std::collections::HashSet;
use std::fmt;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::handler::HandlerName;
use crate::routing::matcher::{join_paths, normalize_path, PathPattern};
use crate::routing::method::HttpMethod;

/// A single compiled route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    method: HttpMethod,
    pattern: PathPattern,
    handler: HandlerName,
    name: Option<String>,
}

impl RouteEntry {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &HandlerName {
        &self.handler
    }

    /// Route helper name (`canvas_new`, `root`), if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn same_key(&self, other: &RouteEntry) -> bool {
        self.method == other.method && self.pattern == other.pattern
    }
}

/// Frozen, ordered route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Resolve a request to its handler name.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> RouteResult<&HandlerName> {
        self.resolve_entry(method, path).map(RouteEntry::handler)
    }

    /// Resolve a request to the full matching entry.
    pub fn resolve_entry(&self, method: HttpMethod, path: &str) -> RouteResult<&RouteEntry> {
        let normalized = normalize_path(path);

        self.find(method, &normalized)
            .or_else(|| match method {
                HttpMethod::Head => self.find(HttpMethod::Get, &normalized),
                _ => None,
            })
            .ok_or_else(|| RouteError::NotFound {
                method: method.to_string(),
                path: path.to_string(),
            })
    }

    /// Resolve with a raw verb token. Verbs outside the recognized set
    /// can never match, so they report `NotFound`.
    pub fn resolve_raw(&self, method: &str, path: &str) -> RouteResult<&RouteEntry> {
        match method.parse::<HttpMethod>() {
            Ok(method) => self.resolve_entry(method, path),
            Err(_) => Err(RouteError::NotFound {
                method: method.to_string(),
                path: path.to_string(),
            }),
        }
    }

    fn find(&self, method: HttpMethod, normalized: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|e| e.method == method && e.pattern.matches(normalized))
    }

    /// Reverse lookup: the path registered under a route name.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name() == Some(name))
            .map(|e| e.pattern.as_str())
    }

    /// Entries that can never be reached because an earlier entry has the
    /// same method and pattern.
    pub fn shadowed(&self) -> Vec<&RouteEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, entry)| self.entries[..*i].iter().any(|e| e.same_key(entry)))
            .map(|(_, entry)| entry)
            .collect()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the table as a `Prefix / Verb / URI Pattern / Controller#Action` listing.
impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADERS: [&str; 4] = ["Prefix", "Verb", "URI Pattern", "Controller#Action"];

        let rows: Vec<[&str; 4]> = self
            .entries
            .iter()
            .map(|e| {
                [
                    e.name().unwrap_or(""),
                    e.method.as_str(),
                    e.pattern.as_str(),
                    e.handler.as_str(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        for row in std::iter::once(HEADERS).chain(rows) {
            let line = format!(
                "{:>w0$} {:<w1$} {:<w2$} {}",
                row[0],
                row[1],
                row[2],
                row[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Startup-phase registration of routes.
///
/// Consumed by [`RouteTableBuilder::build`]; there is no way to add entries to
/// a frozen [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    names: HashSet<String>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry from raw parts. The entry gets no route name.
    pub fn register(&mut self, method: &str, pattern: &str, handler: &str) -> RouteResult<&mut Self> {
        let method = method.parse()?;
        self.push(method, pattern, handler, None)
    }

    /// Append an entry with an explicit route name.
    pub fn route(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        to: &str,
        name: Option<&str>,
    ) -> RouteResult<&mut Self> {
        if let Some(name) = name {
            if self.names.contains(name) {
                return Err(RouteError::DuplicateName(name.to_string()));
            }
        }
        self.push(method, pattern, to, name.map(str::to_string))
    }

    /// `get '/release', to: 'canvas#release'`. The route name is derived from
    /// the path (`release`, `root` for `/`) unless already taken.
    pub fn get(&mut self, pattern: &str, to: &str) -> RouteResult<&mut Self> {
        let name = derive_name("", pattern).filter(|n| !self.names.contains(n));
        self.push(HttpMethod::Get, pattern, to, name)
    }

    /// Open a namespace: paths are prefixed with `/name`, controllers with
    /// `name/` and route names with `name_`.
    pub fn namespace<F>(&mut self, name: &str, f: F) -> RouteResult<&mut Self>
    where
        F: FnOnce(&mut Scope<'_>) -> RouteResult<()>,
    {
        let mut scope = Scope {
            builder: &mut *self,
            path: join_paths("", name),
            module: name.trim_matches('/').to_string(),
            name_prefix: name.trim_matches('/').replace('/', "_"),
        };
        f(&mut scope)?;
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> RouteTable {
        let table = RouteTable {
            entries: self.entries,
        };

        for entry in table.shadowed() {
            let winner = table
                .entries
                .iter()
                .find(|e| e.same_key(entry))
                .map(|e| e.handler.as_str())
                .unwrap_or_default();
            tracing::warn!(
                method = %entry.method,
                path = %entry.pattern,
                handler = %entry.handler,
                shadowed_by = %winner,
                "Route is shadowed by an earlier registration"
            );
        }

        tracing::debug!(routes = table.len(), "Route table frozen");
        table
    }

    fn push(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        to: &str,
        name: Option<String>,
    ) -> RouteResult<&mut Self> {
        let pattern = PathPattern::parse(pattern)?;
        let handler = HandlerName::new(to)?;

        tracing::debug!(
            method = %method,
            path = %pattern,
            handler = %handler,
            name = name.as_deref().unwrap_or(""),
            "Route registered"
        );

        if let Some(name) = &name {
            self.names.insert(name.clone());
        }
        self.entries.push(RouteEntry {
            method,
            pattern,
            handler,
            name,
        });
        Ok(self)
    }
}

/// Registration scope opened by [`RouteTableBuilder::namespace`].
pub struct Scope<'a> {
    builder: &'a mut RouteTableBuilder,
    path: String,
    module: String,
    name_prefix: String,
}

impl Scope<'_> {
    /// `get 'new'` inside `namespace :canvas`: `/canvas/new` → `canvas#new`,
    /// named `canvas_new`. Multi-segment paths map the last segment to the
    /// action and the rest to a nested controller.
    pub fn get(&mut self, path: &str) -> RouteResult<&mut Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let (action, controllers) = segments.split_last().ok_or(RouteError::EmptyPath)?;

        let resource = std::iter::once(self.module.as_str())
            .chain(controllers.iter().copied())
            .collect::<Vec<_>>()
            .join("/");
        let to = format!("{}#{}", resource, action);

        self.add(HttpMethod::Get, path, &to)
    }

    /// `get 'preview', to: 'drafts#show'` inside a namespace resolves the
    /// controller relative to the namespace (`canvas/drafts#show`).
    pub fn get_to(&mut self, path: &str, to: &str) -> RouteResult<&mut Self> {
        let to = format!("{}/{}", self.module, to);
        self.add(HttpMethod::Get, path, &to)
    }

    /// Register any verb relative to the namespace.
    pub fn route(&mut self, method: HttpMethod, path: &str, to: &str) -> RouteResult<&mut Self> {
        let to = format!("{}/{}", self.module, to);
        self.add(method, path, &to)
    }

    /// Nested namespace.
    pub fn namespace<F>(&mut self, name: &str, f: F) -> RouteResult<&mut Self>
    where
        F: FnOnce(&mut Scope<'_>) -> RouteResult<()>,
    {
        let name = name.trim_matches('/');
        let mut nested = Scope {
            builder: &mut *self.builder,
            path: join_paths(&self.path, name),
            module: format!("{}/{}", self.module, name),
            name_prefix: format!("{}_{}", self.name_prefix, name.replace('/', "_")),
        };
        f(&mut nested)?;
        Ok(self)
    }

    fn add(&mut self, method: HttpMethod, path: &str, to: &str) -> RouteResult<&mut Self> {
        if path.trim().is_empty() {
            return Err(RouteError::EmptyPath);
        }
        let full = join_paths(&self.path, path);
        let name = derive_name(&self.name_prefix, path).filter(|n| !self.builder.names.contains(n));
        self.builder.push(method, &full, to, name)?;
        Ok(self)
    }
}

/// Route name derived from a path: segments joined by `_`, prefixed by the
/// enclosing namespace. `/` outside any namespace is `root`.
fn derive_name(prefix: &str, path: &str) -> Option<String> {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
                .collect()
        })
        .collect();

    match (prefix.is_empty(), segments.is_empty()) {
        (true, true) => Some("root".to_string()),
        (false, true) => Some(format!("{}_root", prefix)),
        (true, false) => Some(segments.join("_")),
        (false, false) => Some(format!("{}_{}", prefix, segments.join("_"))),
    }
}
