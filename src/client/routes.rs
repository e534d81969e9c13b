use std::sync::OnceLock;

use regex::Regex;

use super::fetch::ResourceFetcher;
use super::screenshot::ScreenshotBackend;
use super::{FigureView, LoadOutcome, ResourceLoader};
use crate::store::ResourceKind;

/// Resource shown when the address has no route.
pub const DEFAULT_RESOURCE: ResourceKind = ResourceKind::Motivation;

fn resource_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/?(?P<resource>[a-zA-Z]+)/?").expect("resource prefix regex"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientRoute {
    Home,
    Resource(ResourceKind),
    Item(ResourceKind, String),
}

impl ClientRoute {
    /// Parses a hash-router path such as `#/joke/12`, `/proverb/` or ``.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_start_matches('#').trim_start_matches('/');
        if path.is_empty() {
            return Some(Self::Home);
        }

        let mut parts = path.splitn(2, '/');
        let kind = ResourceKind::parse(parts.next()?)?;
        match parts.next().map(|rest| rest.trim_end_matches('/')) {
            None | Some("") => Some(Self::Resource(kind)),
            Some(id) if !id.contains('/') => Some(Self::Item(kind, id.to_string())),
            Some(_) => None,
        }
    }
}

/// Leading resource name of a link or address, e.g. `joke` for `/joke/3`.
pub fn resource_prefix(path: &str) -> Option<&str> {
    resource_prefix_re()
        .captures(path)
        .and_then(|c| c.name("resource"))
        .map(|m| m.as_str())
}

/// Which navigation links are current for `matched`. `None` when the
/// address has no resource segment, in which case links are left alone.
pub fn highlight_current<S: AsRef<str>>(links: &[S], matched: &str) -> Option<Vec<bool>> {
    let matched = resource_prefix(matched)?;
    Some(
        links
            .iter()
            .map(|href| resource_prefix(href.as_ref()) == Some(matched))
            .collect(),
    )
}

/// DOM side of the navigation highlight.
pub trait NavLinks {
    fn nav_hrefs(&self) -> Vec<String>;
    fn set_nav_current(&mut self, index: usize, current: bool);
}

pub fn apply_highlight<N: NavLinks + ?Sized>(nav: &mut N, matched: &str) {
    let hrefs = nav.nav_hrefs();
    if let Some(marks) = highlight_current(&hrefs, matched) {
        for (index, current) in marks.into_iter().enumerate() {
            nav.set_nav_current(index, current);
        }
    }
}

impl<F, V, S> ResourceLoader<F, V, S>
where
    F: ResourceFetcher,
    V: FigureView,
    S: ScreenshotBackend,
{
    /// Router entry point: loads whatever `path` addresses and highlights
    /// the matching navigation link. Unknown paths are ignored.
    pub async fn navigate(&mut self, path: &str) -> LoadOutcome {
        let Some(route) = ClientRoute::parse(path) else {
            tracing::debug!(path, "no client route");
            return LoadOutcome::Skipped;
        };
        apply_highlight(&mut self.view, path);
        match route {
            ClientRoute::Home => self.load_resource(Some(DEFAULT_RESOURCE), None).await,
            ClientRoute::Resource(kind) => self.load_resource(Some(kind), None).await,
            ClientRoute::Item(kind, id) => self.load_resource(Some(kind), Some(&id)).await,
        }
    }
}
