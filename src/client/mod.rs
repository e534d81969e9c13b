//! Browser-side resource loading, written against small adapter traits so
//! the state machine runs the same under a real DOM binding or in tests.

pub mod fetch;
pub mod render;
pub mod routes;
pub mod screenshot;
pub mod share;

use tracing::{debug, error, warn};

use crate::store::{ResourceKind, RANDOM_ID};
use fetch::ResourceFetcher;
use routes::NavLinks;
use screenshot::{ScreenshotBackend, ScreenshotError, SCREENSHOT_MIME};
use share::{ShareLinks, SharePlatform};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureState {
    Idle,
    Loading,
    Active,
    LoadFailed,
}

impl FigureState {
    /// Value of the figure card's `data-state` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Idle | Self::Loading => "loading",
            Self::Active => "active",
            Self::LoadFailed => "load-failed",
        }
    }
}

/// DOM adapter for the figure card, its controls, the address bar and the
/// share anchors.
pub trait FigureView: NavLinks {
    fn set_reload_enabled(&mut self, enabled: bool);
    fn set_download_enabled(&mut self, enabled: bool);
    fn set_figure_state(&mut self, state: FigureState);
    fn set_caption_html(&mut self, html: &str);
    fn set_title(&mut self, title: &str);
    fn card_background_color(&self) -> String;
    /// Full current location, used for share links.
    fn location(&self) -> String;
    /// Rewrites the address in place: no new history entry and no route
    /// handling.
    fn replace_location(&mut self, path: &str);
    fn set_share_links(&mut self, links: &ShareLinks);
    /// Link recorded on the native share target, if any.
    fn native_share_link(&self) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub current: Option<ResourceKind>,
    pub can_reload: bool,
    pub can_download_screenshot: bool,
    pub screenshot: Option<Vec<u8>>,
    pub card_background: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No resource given and none loaded before.
    Skipped,
    Loaded { kind: ResourceKind, id: i64 },
    Failed,
}

pub struct ResourceLoader<F, V, S> {
    fetcher: F,
    view: V,
    screenshots: S,
    session: Session,
    state: FigureState,
}

impl<F, V, S> ResourceLoader<F, V, S>
where
    F: ResourceFetcher,
    V: FigureView,
    S: ScreenshotBackend,
{
    pub fn new(fetcher: F, view: V, screenshots: S) -> Self {
        let mut loader = Self {
            fetcher,
            view,
            screenshots,
            session: Session::default(),
            state: FigureState::Idle,
        };
        loader.apply(FigureState::Idle);
        loader
    }

    pub fn state(&self) -> FigureState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Moves to `next` and performs every UI effect that belongs to it.
    fn transition(&mut self, next: FigureState) {
        debug!(from = ?self.state, to = ?next, "figure transition");
        self.apply(next);
    }

    fn apply(&mut self, next: FigureState) {
        let (reload, download) = match next {
            FigureState::Idle | FigureState::Loading => (false, false),
            FigureState::Active => (true, true),
            FigureState::LoadFailed => (true, false),
        };
        if next == FigureState::Loading {
            self.session.screenshot = None;
        }
        self.state = next;
        self.session.can_reload = reload;
        self.view.set_reload_enabled(reload);
        self.set_download_enabled(download);
        self.view.set_figure_state(next);
    }

    fn set_download_enabled(&mut self, enabled: bool) {
        self.session.can_download_screenshot = enabled;
        self.view.set_download_enabled(enabled);
    }

    /// Fetches `id` (default `random`) of `kind` (default: the last loaded
    /// resource) and renders it.
    pub async fn load_resource(&mut self, kind: Option<ResourceKind>, id: Option<&str>) -> LoadOutcome {
        let Some(kind) = kind.or(self.session.current) else {
            return LoadOutcome::Skipped;
        };
        let id = id.filter(|id| !id.is_empty()).unwrap_or(RANDOM_ID);

        self.transition(FigureState::Loading);
        self.session.current = Some(kind);

        let record = match self.fetcher.fetch(kind, id).await {
            Ok(record) => record,
            Err(err) => {
                error!(resource = kind.singular(), id, error = %err, "resource load failed");
                self.transition(FigureState::LoadFailed);
                return LoadOutcome::Failed;
            }
        };

        self.view.set_caption_html(&render::render_kind(kind, &record));
        self.view.set_title(kind.singular());

        let path = format!("{}/{}", kind.singular(), record.id);
        self.view.replace_location(&path);
        routes::apply_highlight(&mut self.view, &path);

        let links = ShareLinks::for_location(&self.view.location());
        self.view.set_share_links(&links);

        self.transition(FigureState::Active);
        LoadOutcome::Loaded {
            kind,
            id: record.id,
        }
    }

    /// Reload control: same resource, new random pick.
    pub async fn reload(&mut self) -> LoadOutcome {
        if !self.session.can_reload {
            return LoadOutcome::Skipped;
        }
        self.load_resource(None, None).await
    }

    /// Captures the figure (once per loaded record) and downloads it under a
    /// timestamped name. Only available while a record is shown.
    pub async fn download_screenshot(&mut self) -> Result<String, ScreenshotError> {
        if self.state != FigureState::Active || !self.session.can_download_screenshot {
            return Err(ScreenshotError::Unavailable);
        }

        let background = match &self.session.card_background {
            Some(color) => color.clone(),
            None => {
                let color = self.view.card_background_color();
                self.session.card_background = Some(color.clone());
                color
            }
        };

        self.set_download_enabled(false);
        let png = match self.session.screenshot.take() {
            Some(png) => png,
            None => match self.screenshots.capture(&background).await {
                Ok(png) => png,
                Err(err) => {
                    warn!(error = %err, "screenshot capture failed");
                    self.set_download_enabled(true);
                    return Err(err);
                }
            },
        };

        let filename = screenshot::screenshot_filename(&chrono::Local::now());
        let result = self.screenshots.download(&png, &filename, SCREENSHOT_MIME);
        self.session.screenshot = Some(png);
        self.set_download_enabled(true);

        match result {
            Ok(()) => Ok(filename),
            Err(err) => {
                warn!(error = %err, %filename, "screenshot download failed");
                Err(err)
            }
        }
    }

    /// Native share button.
    pub fn share_native<P: SharePlatform>(&self, platform: &mut P) -> bool {
        let link = self.view.native_share_link();
        share::handle_native_share(link.as_deref(), platform)
    }
}
