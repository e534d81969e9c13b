use std::cell::Cell;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::client::fetch::{HttpFetcher, LoadError, ResourceFetcher};
use crate::client::routes::NavLinks;
use crate::client::screenshot::{ScreenshotBackend, ScreenshotError};
use crate::client::share::{ShareLinks, SharePlatform};
use crate::client::{FigureState, FigureView, LoadOutcome, ResourceLoader};
use crate::server::{self, Mode, ServerConfig};
use crate::store::{Record, ResourceKind, ResourceStore, RANDOM_ID};

fn fixture_store(jokes: i64) -> ResourceStore {
    let jokes = (1..=jokes)
        .map(|id| {
            let title = format!("Joke {id}");
            Record::new(id, [("title", title.as_str()), ("body", "na so")])
        })
        .collect();
    let motivations = vec![
        Record::new(1, [("text", "*Wake up*\nGo hustle")]),
        Record::new(2, [("text", "No give up")]),
        Record::new(3, [("text", "<script>alert(1)</script>")]),
    ];
    let proverbs = vec![
        Record::new(10, [("proverb", "Monkey no fine"), ("moral", "Beauty is relative")]),
        Record::new(20, [("proverb", "Water no get enemy"), ("moral", "Everyone needs water")]),
    ];
    ResourceStore::new(jokes, motivations, proverbs)
}

fn dev_config() -> ServerConfig {
    ServerConfig {
        mode: Mode::Development,
        ..ServerConfig::default()
    }
}

async fn spawn_app(config: ServerConfig, store: ResourceStore) -> SocketAddr {
    let app = server::build_app(&config, Arc::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let response = http()
        .get(format!("http://{addr}{path}"))
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn ids(page: &Value) -> Vec<i64> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_pages_follow_lookahead_rule() {
    let addr = spawn_app(dev_config(), fixture_store(25)).await;

    let (status, page) = get_json(addr, "/api/jokes/?page=1").await;
    assert_eq!(status, 200);
    assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        page["pagination"],
        json!({"page": 1, "next": "/jokes/?page=2", "prev": null})
    );

    let (_, page) = get_json(addr, "/api/jokes/?page=2").await;
    assert_eq!(ids(&page), (11..=20).collect::<Vec<_>>());
    assert_eq!(
        page["pagination"],
        json!({"page": 2, "next": null, "prev": "/jokes/?page=1"})
    );

    let (_, page) = get_json(addr, "/api/jokes/?page=3").await;
    assert_eq!(ids(&page), (21..=25).collect::<Vec<_>>());

    let (_, page) = get_json(addr, "/api/jokes/?page=2&page=3").await;
    assert_eq!(page["pagination"]["page"], 2);

    let (_, page) = get_json(addr, "/api/jokes/?page=9").await;
    assert!(ids(&page).is_empty());
    assert_eq!(page["pagination"]["prev"], Value::Null);
}

#[tokio::test]
async fn malformed_page_values_mean_first_page() {
    let addr = spawn_app(dev_config(), fixture_store(25)).await;
    for path in [
        "/api/jokes/",
        "/api/jokes",
        "/api/jokes/?page=abc",
        "/api/jokes/?page=0",
        "/api/jokes/?page=-4",
    ] {
        let (status, page) = get_json(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(page["pagination"]["page"], 1, "{path}");
        assert_eq!(ids(&page).first(), Some(&1), "{path}");
    }
}

#[tokio::test]
async fn item_limit_controls_page_size() {
    let config = ServerConfig {
        item_limit: 4,
        ..dev_config()
    };
    let addr = spawn_app(config, fixture_store(25)).await;
    let (_, page) = get_json(addr, "/api/proverbs/").await;
    assert_eq!(ids(&page), vec![10, 20]);
    assert_eq!(page["pagination"]["next"], Value::Null);

    let (_, page) = get_json(addr, "/api/jokes/?page=2").await;
    assert_eq!(ids(&page), vec![5, 6, 7, 8]);
    assert_eq!(page["pagination"]["next"], "/jokes/?page=3");
}

#[tokio::test]
async fn single_items_round_trip_by_id() {
    let addr = spawn_app(dev_config(), fixture_store(25)).await;

    for page in 1..=3 {
        let (_, list) = get_json(addr, &format!("/api/jokes/?page={page}")).await;
        for record in list["data"].as_array().unwrap() {
            let id = record["id"].as_i64().unwrap();
            let (status, single) = get_json(addr, &format!("/api/joke/{id}")).await;
            assert_eq!(status, 200);
            assert_eq!(&single, record);
        }
    }

    for kind in ResourceKind::ALL {
        let (status, random) = get_json(addr, &format!("/api/{kind}/{RANDOM_ID}")).await;
        assert_eq!(status, 200);
        let id = random["id"].as_i64().unwrap();
        let (_, again) = get_json(addr, &format!("/api/{kind}/{id}")).await;
        assert_eq!(again, random);
    }
}

#[tokio::test]
async fn unmatched_ids_are_client_errors() {
    let addr = spawn_app(dev_config(), fixture_store(5)).await;
    for (path, message) in [
        ("/api/joke/99", "joke ID is invalid"),
        ("/api/joke/abc", "joke ID is invalid"),
        ("/api/motivation/-1", "motivation ID is invalid"),
        ("/api/proverb/1", "proverb ID is invalid"),
        ("/api/joke/%FF", "joke ID is invalid"),
        ("/api/joke/%C3%28", "joke ID is invalid"),
    ] {
        let (status, body) = get_json(addr, path).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(body, json!({"error": true, "message": message}), "{path}");
    }
}

#[tokio::test]
async fn ping_reports_counts_for_any_method() {
    let addr = spawn_app(dev_config(), fixture_store(7)).await;
    let expected = json!({
        "jokes_items_count": 7,
        "motivation_items_count": 3,
        "proverbs_items_count": 2,
    });

    let (status, body) = get_json(addr, "/api/ping").await;
    assert_eq!(status, 200);
    assert_eq!(body, expected);

    let response = http()
        .post(format!("http://{addr}/api/ping"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), expected);
}

#[tokio::test]
async fn unknown_api_paths_are_not_found_for_every_verb() {
    let addr = spawn_app(dev_config(), fixture_store(5)).await;
    let client = http();
    let expected = json!({"error": true, "message": "Resource not found!"});
    for method in [reqwest::Method::GET, reqwest::Method::POST, reqwest::Method::DELETE] {
        for path in ["/api/riddles/", "/api/joke", "/api/nope/1/2"] {
            let response = client
                .request(method.clone(), format!("http://{addr}{path}"))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status().as_u16(), 404, "{method} {path}");
            assert_eq!(response.json::<Value>().await.unwrap(), expected);
        }
    }

    for (method, path) in [
        (reqwest::Method::POST, "/api/jokes/"),
        (reqwest::Method::PUT, "/api/proverbs"),
        (reqwest::Method::DELETE, "/api/joke/1"),
    ] {
        let response = client
            .request(method.clone(), format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404, "{method} {path}");
        assert_eq!(response.json::<Value>().await.unwrap(), expected);
    }
}

#[tokio::test]
async fn custom_api_route_mounts_api() {
    let config = ServerConfig {
        api_route: "/v1".to_string(),
        ..dev_config()
    };
    let addr = spawn_app(config, fixture_store(5)).await;
    let (status, _) = get_json(addr, "/v1/ping").await;
    assert_eq!(status, 200);

    let response = http()
        .get(format!("http://{addr}/api/ping"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn production_redirects_plain_http() {
    let config = ServerConfig {
        mode: Mode::Production,
        ..ServerConfig::default()
    };
    let addr = spawn_app(config, fixture_store(5)).await;

    let response = http()
        .get(format!("http://{addr}/api/jokes/?page=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(
        response.headers()["location"],
        format!("https://{addr}/api/jokes/?page=2").as_str()
    );

    let response = http()
        .get(format!("http://{addr}/api/ping"))
        .header("x-forwarded-proto", "https")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn development_never_redirects() {
    let addr = spawn_app(dev_config(), fixture_store(5)).await;
    let response = http()
        .get(format!("http://{addr}/api/ping"))
        .header("x-forwarded-proto", "http")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn frontend_is_served_with_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>akpors</h1>").unwrap();
    std::fs::write(dir.path().join("404.html"), "<h1>lost</h1>").unwrap();
    let config = ServerConfig {
        enable_frontend: true,
        frontend_dir: dir.path().to_path_buf(),
        ..dev_config()
    };
    let addr = spawn_app(config, fixture_store(5)).await;
    let client = http();

    let response = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "<h1>akpors</h1>");

    for path in ["/missing.js", "/404.html"] {
        let response = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404, "{path}");
        assert_eq!(response.text().await.unwrap(), "<h1>lost</h1>", "{path}");
    }

    let (status, _) = get_json(addr, "/api/ping").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn frontend_disabled_leaves_plain_not_found() {
    let addr = spawn_app(dev_config(), fixture_store(5)).await;
    let response = http()
        .get(format!("http://{addr}/index.html"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

// client side

struct MemoryFetcher {
    store: ResourceStore,
    offline: Cell<bool>,
}

impl MemoryFetcher {
    fn new(store: ResourceStore) -> Self {
        Self {
            store,
            offline: Cell::new(false),
        }
    }
}

impl ResourceFetcher for MemoryFetcher {
    fn fetch<'a>(&'a self, kind: ResourceKind, id: &'a str)
        -> BoxFuture<'a, Result<Record, LoadError>> {
        let result = if self.offline.get() {
            Err(LoadError::Rejected {
                kind: kind.singular(),
                id: id.to_string(),
                status: 503,
                message: "offline".to_string(),
            })
        } else {
            let found = if id == RANDOM_ID {
                self.store.records(kind).first()
            } else {
                id.parse().ok().and_then(|id| self.store.find(kind, id))
            };
            found.cloned().ok_or_else(|| LoadError::Rejected {
                kind: kind.singular(),
                id: id.to_string(),
                status: 400,
                message: format!("{kind} ID is invalid"),
            })
        };
        Box::pin(futures::future::ready(result))
    }
}

#[derive(Default)]
struct FakeView {
    reload_enabled: bool,
    download_enabled: bool,
    figure: Option<FigureState>,
    caption: String,
    title: String,
    path: String,
    replaced: usize,
    share: Option<ShareLinks>,
    nav: Vec<(String, bool)>,
    background_reads: Cell<usize>,
}

impl FakeView {
    fn with_nav() -> Self {
        Self {
            nav: ["/joke/", "/motivation/", "/proverb/"]
                .iter()
                .map(|href| (href.to_string(), false))
                .collect(),
            ..Self::default()
        }
    }

    fn current_nav(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|(_, current)| *current)
            .map(|(href, _)| href.as_str())
            .collect()
    }
}

impl NavLinks for FakeView {
    fn nav_hrefs(&self) -> Vec<String> {
        self.nav.iter().map(|(href, _)| href.clone()).collect()
    }

    fn set_nav_current(&mut self, index: usize, current: bool) {
        self.nav[index].1 = current;
    }
}

impl FigureView for FakeView {
    fn set_reload_enabled(&mut self, enabled: bool) {
        self.reload_enabled = enabled;
    }

    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }

    fn set_figure_state(&mut self, state: FigureState) {
        self.figure = Some(state);
    }

    fn set_caption_html(&mut self, html: &str) {
        self.caption = html.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn card_background_color(&self) -> String {
        self.background_reads.set(self.background_reads.get() + 1);
        "rgb(255, 255, 255)".to_string()
    }

    fn location(&self) -> String {
        format!("https://akpors.app/#/{}", self.path)
    }

    fn replace_location(&mut self, path: &str) {
        self.path = path.to_string();
        self.replaced += 1;
    }

    fn set_share_links(&mut self, links: &ShareLinks) {
        self.share = Some(links.clone());
    }

    fn native_share_link(&self) -> Option<String> {
        self.share.as_ref().map(|links| links.native.clone())
    }
}

#[derive(Default)]
struct CameraLog {
    captures: usize,
    fail_next: bool,
    backgrounds: Vec<String>,
    downloads: Vec<String>,
}

#[derive(Clone, Default)]
struct FakeCamera {
    log: Arc<Mutex<CameraLog>>,
}

impl ScreenshotBackend for FakeCamera {
    fn capture<'a>(&'a mut self, background: &'a str)
        -> BoxFuture<'a, Result<Vec<u8>, ScreenshotError>> {
        let mut log = self.log.lock().unwrap();
        log.backgrounds.push(background.to_string());
        let result = if log.fail_next {
            log.fail_next = false;
            Err(ScreenshotError::Capture("canvas tainted".to_string()))
        } else {
            log.captures += 1;
            Ok(vec![0x89, b'P', b'N', b'G'])
        };
        Box::pin(futures::future::ready(result))
    }

    fn download(&mut self, png: &[u8], filename: &str, mime: &str) -> Result<(), ScreenshotError> {
        assert_eq!(mime, "image/png");
        assert!(!png.is_empty());
        self.log.lock().unwrap().downloads.push(filename.to_string());
        Ok(())
    }
}

type TestLoader = ResourceLoader<MemoryFetcher, FakeView, FakeCamera>;

fn loader() -> (TestLoader, FakeCamera) {
    let camera = FakeCamera::default();
    let loader = ResourceLoader::new(
        MemoryFetcher::new(fixture_store(5)),
        FakeView::with_nav(),
        camera.clone(),
    );
    (loader, camera)
}

fn assert_settled(loader: &TestLoader, succeeded: bool) {
    let view = loader.view();
    assert!(view.reload_enabled);
    assert!(loader.session().can_reload);
    assert_eq!(view.download_enabled, succeeded);
    assert_eq!(loader.session().can_download_screenshot, succeeded);
}

#[test]
fn loader_starts_idle_with_controls_disabled() {
    let (loader, _) = loader();
    assert_eq!(loader.state(), FigureState::Idle);
    assert_eq!(loader.view().figure.map(FigureState::as_attr), Some("loading"));
    assert!(!loader.view().reload_enabled);
    assert!(!loader.view().download_enabled);
    assert_eq!(loader.session().current, None);
}

#[tokio::test]
async fn load_without_resource_is_a_no_op() {
    let (mut loader, _) = loader();
    assert_eq!(loader.load_resource(None, None).await, LoadOutcome::Skipped);
    assert_eq!(loader.reload().await, LoadOutcome::Skipped);
    assert_eq!(loader.state(), FigureState::Idle);
}

#[tokio::test]
async fn successful_load_renders_and_syncs_address() {
    let (mut loader, _) = loader();
    let outcome = loader
        .load_resource(Some(ResourceKind::Joke), Some("3"))
        .await;
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            kind: ResourceKind::Joke,
            id: 3
        }
    );
    assert_eq!(loader.state(), FigureState::Active);
    assert_settled(&loader, true);

    let view = loader.view();
    assert_eq!(view.figure.map(FigureState::as_attr), Some("active"));
    assert_eq!(view.caption, "<strong>Joke 3</strong><br>na so");
    assert_eq!(view.title, "joke");
    assert_eq!(view.path, "joke/3");
    assert_eq!(view.replaced, 1);
    assert_eq!(view.current_nav(), vec!["/joke/"]);
    let share = view.share.as_ref().unwrap();
    assert_eq!(share.native, "https://akpors.app/#/joke/3");
    assert!(share.facebook.ends_with("https%3A%2F%2Fakpors.app%2F%23%2Fjoke%2F3"));
}

#[tokio::test]
async fn random_load_writes_back_concrete_id() {
    let (mut loader, _) = loader();
    loader
        .load_resource(Some(ResourceKind::Proverb), None)
        .await;
    assert_eq!(loader.view().path, "proverb/10");

    loader
        .load_resource(Some(ResourceKind::Proverb), Some(""))
        .await;
    assert_eq!(loader.view().path, "proverb/10");
}

#[tokio::test]
async fn failed_load_enables_reload_only() {
    let (mut loader, _) = loader();
    let outcome = loader
        .load_resource(Some(ResourceKind::Joke), Some("404"))
        .await;
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(loader.state(), FigureState::LoadFailed);
    assert_eq!(
        loader.view().figure.map(FigureState::as_attr),
        Some("load-failed")
    );
    assert_settled(&loader, false);
    assert_eq!(loader.view().replaced, 0);
    assert_eq!(loader.session().current, Some(ResourceKind::Joke));
}

#[tokio::test]
async fn last_settled_load_decides_controls() {
    let (mut loader, _) = loader();
    loader.load_resource(Some(ResourceKind::Joke), None).await;
    assert_settled(&loader, true);

    loader.fetcher().offline.set(true);
    assert_eq!(loader.reload().await, LoadOutcome::Failed);
    assert_settled(&loader, false);

    loader.fetcher().offline.set(false);
    assert!(matches!(loader.reload().await, LoadOutcome::Loaded { kind: ResourceKind::Joke, .. }));
    assert_settled(&loader, true);
}

#[tokio::test]
async fn screenshot_requires_loaded_resource() {
    let (mut loader, camera) = loader();
    assert!(matches!(
        loader.download_screenshot().await,
        Err(ScreenshotError::Unavailable)
    ));

    loader
        .load_resource(Some(ResourceKind::Joke), Some("404"))
        .await;
    assert!(matches!(
        loader.download_screenshot().await,
        Err(ScreenshotError::Unavailable)
    ));
    assert_eq!(camera.log.lock().unwrap().captures, 0);
}

#[tokio::test]
async fn screenshot_is_cached_until_next_load() {
    let (mut loader, camera) = loader();
    loader.load_resource(Some(ResourceKind::Motivation), None).await;

    let first = loader.download_screenshot().await.unwrap();
    let second = loader.download_screenshot().await.unwrap();
    assert!(first.starts_with("screenshot-") && first.ends_with(".png"));
    assert_eq!(second.len(), "screenshot-DD-MM-YYYY--HH-MM-SS.png".len());
    assert!(loader.view().download_enabled);
    {
        let log = camera.log.lock().unwrap();
        assert_eq!(log.captures, 1);
        assert_eq!(log.downloads.len(), 2);
        assert_eq!(log.backgrounds, vec!["rgb(255, 255, 255)".to_string()]);
    }

    loader.load_resource(Some(ResourceKind::Motivation), Some("2")).await;
    assert!(loader.session().screenshot.is_none());
    loader.download_screenshot().await.unwrap();
    assert_eq!(camera.log.lock().unwrap().captures, 2);
    // background color is read once and reused
    assert_eq!(loader.view().background_reads.get(), 1);
}

#[tokio::test]
async fn capture_failure_leaves_state_usable() {
    let (mut loader, camera) = loader();
    loader.load_resource(Some(ResourceKind::Proverb), None).await;
    camera.log.lock().unwrap().fail_next = true;

    assert!(matches!(
        loader.download_screenshot().await,
        Err(ScreenshotError::Capture(_))
    ));
    assert_eq!(loader.state(), FigureState::Active);
    assert!(loader.view().download_enabled);
    assert!(loader.session().screenshot.is_none());

    loader.download_screenshot().await.unwrap();
    assert_eq!(camera.log.lock().unwrap().downloads.len(), 1);
}

#[tokio::test]
async fn navigate_dispatches_routes() {
    let (mut loader, _) = loader();
    assert_eq!(loader.navigate("#/unknown").await, LoadOutcome::Skipped);

    assert_eq!(
        loader.navigate("").await,
        LoadOutcome::Loaded {
            kind: ResourceKind::Motivation,
            id: 1
        }
    );
    assert_eq!(loader.view().current_nav(), vec!["/motivation/"]);

    assert_eq!(
        loader.navigate("#/proverb/").await,
        LoadOutcome::Loaded {
            kind: ResourceKind::Proverb,
            id: 10
        }
    );
    assert_eq!(
        loader.navigate("#/proverb/20").await,
        LoadOutcome::Loaded {
            kind: ResourceKind::Proverb,
            id: 20
        }
    );
    assert_eq!(loader.view().current_nav(), vec!["/proverb/"]);
    assert_eq!(loader.view().replaced, 3);
}

#[tokio::test]
async fn motivation_markup_is_escaped_in_caption() {
    let (mut loader, _) = loader();
    loader
        .load_resource(Some(ResourceKind::Motivation), Some("3"))
        .await;
    let caption = &loader.view().caption;
    assert!(!caption.contains("<script>"));
    assert!(caption.contains("&lt;script&gt;"));
}

#[derive(Default)]
struct Platform {
    shared: Vec<String>,
}

impl SharePlatform for Platform {
    fn supports_share(&self) -> bool {
        true
    }

    fn share(&mut self, url: &str) {
        self.shared.push(url.to_string());
    }
}

#[tokio::test]
async fn native_share_uses_recorded_location() {
    let (mut loader, _) = loader();
    let mut platform = Platform::default();
    assert!(!loader.share_native(&mut platform));

    loader.load_resource(Some(ResourceKind::Joke), Some("2")).await;
    assert!(loader.share_native(&mut platform));
    assert_eq!(platform.shared, vec!["https://akpors.app/#/joke/2".to_string()]);
}

#[tokio::test]
async fn http_fetcher_drives_loader_against_server() {
    let addr = spawn_app(dev_config(), fixture_store(25)).await;
    let fetcher = HttpFetcher::new(
        &format!("http://{addr}/api"),
        std::time::Duration::from_secs(5),
    )
    .unwrap();
    let mut loader = ResourceLoader::new(fetcher, FakeView::with_nav(), FakeCamera::default());

    assert_eq!(
        loader.navigate("#/joke/7").await,
        LoadOutcome::Loaded {
            kind: ResourceKind::Joke,
            id: 7
        }
    );
    assert_eq!(loader.view().caption, "<strong>Joke 7</strong><br>na so");

    assert_eq!(loader.navigate("#/joke/999").await, LoadOutcome::Failed);
    assert_eq!(loader.state(), FigureState::LoadFailed);
    assert!(loader.view().reload_enabled);
    assert!(!loader.view().download_enabled);

    let outcome = loader.reload().await;
    let LoadOutcome::Loaded { id, .. } = outcome else {
        panic!("reload failed: {outcome:?}");
    };
    assert!((1..=25).contains(&id));
    assert_eq!(loader.view().path, format!("joke/{id}"));
}
