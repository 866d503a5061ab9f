//! Integration tests for the Spore client.
//!
//! Every operation runs against a wiremock server standing in for the
//! content service.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use spore_client::{AssetType, Error, Page, Result, SporeClient, ViewType, XmlDocument};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stats>
  <totalUploads>191758180</totalUploads>
  <dayUploads>1250</dayUploads>
  <totalUsers>6178124</totalUsers>
  <dayUsers>40</dayUsers>
</stats>"#;

const MALFORMED_XML: &str = "<stats><totalUploads>191758180</totalUploads>";

type DocumentOp = fn(SporeClient) -> BoxFuture<'static, Result<XmlDocument>>;

fn op(path: &'static str, call: DocumentOp) -> (&'static str, DocumentOp) {
    (path, call)
}

/// Every document operation paired with the path it must request.
fn document_operations() -> Vec<(&'static str, DocumentOp)> {
    vec![
        op("/rest/stats", |c| async move { c.daily_stats().await }.boxed()),
        op("/rest/creature/500267423060", |c| {
            async move { c.assets().creature_stats(500267423060).await }.boxed()
        }),
        op("/rest/user/MaxisCactus", |c| {
            async move { c.users().profile("MaxisCactus").await }.boxed()
        }),
        op("/rest/assets/user/MaxisCactus/0/10", |c| {
            async move { c.users().assets("MaxisCactus", Page::new(0, 10)).await }.boxed()
        }),
        op("/rest/assets/sporecast/500190457259/20/5", |c| {
            async move { c.sporecasts().assets(500190457259, Page::new(20, 5)).await }.boxed()
        }),
        op("/rest/achievements/MaxisCactus/0/5", |c| {
            async move { c.users().achievements("MaxisCactus", Page::new(0, 5)).await }.boxed()
        }),
        op("/rest/asset/500267423060", |c| {
            async move { c.assets().info(500267423060).await }.boxed()
        }),
        op("/rest/comments/500267423060/0/3", |c| {
            async move { c.assets().comments(500267423060, Page::new(0, 3)).await }.boxed()
        }),
        op("/rest/users/buddies/MaxisCactus/0/10", |c| {
            async move { c.users().buddies("MaxisCactus", Page::new(0, 10)).await }.boxed()
        }),
        op("/rest/users/subscribers/MaxisCactus/0/10", |c| {
            async move { c.users().subscribers("MaxisCactus", Page::new(0, 10)).await }.boxed()
        }),
        op("/rest/assets/search/NEWEST/0/10", |c| {
            async move { c.assets().search("NEWEST", Page::new(0, 10)).await }.boxed()
        }),
        op("/rest/assets/search/NEWEST/0/10/CREATURE", |c| {
            async move {
                c.assets()
                    .search_by_type("NEWEST", Page::new(0, 10), "CREATURE")
                    .await
            }
            .boxed()
        }),
        op("/static/model/123/456/789/123456789.xml", |c| {
            async move { c.assets().model_xml(123456789).await }.boxed()
        }),
        op("/atom/assets/user/MaxisCactus", |c| {
            async move { c.feeds().user_assets("MaxisCactus").await }.boxed()
        }),
        op("/atom/events/user/MaxisCactus", |c| {
            async move { c.feeds().user_events("MaxisCactus").await }.boxed()
        }),
        op("/atom/events/asset/500267423060", |c| {
            async move { c.feeds().asset_events(500267423060).await }.boxed()
        }),
        op("/atom/sporecast/500190457259", |c| {
            async move { c.feeds().sporecast(500190457259).await }.boxed()
        }),
        op("/atom/assets/view/TOP_RATED/5/15", |c| {
            async move { c.feeds().search(ViewType::TopRated, Page::new(5, 15)).await }.boxed()
        }),
    ]
}

fn client_for(server: &MockServer) -> SporeClient {
    SporeClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

async fn serve(server: &MockServer, at: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Document operations
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_document_operations_return_parsed_body() {
    let expected = XmlDocument::parse(STATS_XML.as_bytes()).unwrap();

    for (at, call) in document_operations() {
        let server = MockServer::start().await;
        serve(
            &server,
            at,
            ResponseTemplate::new(200).set_body_string(STATS_XML),
        )
        .await;

        let doc = call(client_for(&server))
            .await
            .unwrap_or_else(|e| panic!("{at}: {e}"));
        assert_eq!(doc, expected, "{at}");
    }
}

#[tokio::test]
async fn test_document_operations_report_http_status() {
    for (at, call) in document_operations() {
        let server = MockServer::start().await;
        serve(&server, at, ResponseTemplate::new(404)).await;

        let err = call(client_for(&server)).await.unwrap_err();
        match err {
            Error::RemoteRequestFailed { status, url } => {
                assert_eq!(status, 404, "{at}");
                assert!(url.ends_with(at), "{url} should end with {at}");
            }
            other => panic!("{at}: expected RemoteRequestFailed, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_document_operations_reject_malformed_xml() {
    for (at, call) in document_operations() {
        let server = MockServer::start().await;
        serve(
            &server,
            at,
            ResponseTemplate::new(200).set_body_string(MALFORMED_XML),
        )
        .await;

        let err = call(client_for(&server)).await.unwrap_err();
        assert!(
            matches!(err, Error::ResponseParseFailed(_)),
            "{at}: got {err:?}"
        );
    }
}

#[tokio::test]
async fn test_document_operations_reject_multiple_roots() {
    for (at, call) in document_operations() {
        let server = MockServer::start().await;
        serve(
            &server,
            at,
            ResponseTemplate::new(200).set_body_string("<stats><day>1</day></stats><stats/>"),
        )
        .await;

        let err = call(client_for(&server)).await.unwrap_err();
        assert!(
            matches!(err, Error::ResponseParseFailed(_)),
            "{at}: got {err:?}"
        );
    }
}

#[tokio::test]
async fn test_server_error_body_is_not_parsed() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rest/stats",
        ResponseTemplate::new(500).set_body_string(STATS_XML),
    )
    .await;

    let err = client_for(&server).daily_stats().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_search_with_typed_tokens() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rest/assets/search/CUTE_AND_CREEPY/0/20/UFO",
        ResponseTemplate::new(200).set_body_string(STATS_XML),
    )
    .await;

    client_for(&server)
        .assets()
        .search_by_type(ViewType::CuteAndCreepy, Page::first(20), AssetType::Ufo)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_username_is_sent_percent_encoded() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rest/user/space%20cadet",
        ResponseTemplate::new(200).set_body_string("<user><name>space cadet</name></user>"),
    )
    .await;

    let doc = client_for(&server)
        .users()
        .profile("space cadet")
        .await
        .unwrap();
    assert_eq!(doc.child_text("name").as_deref(), Some("space cadet"));
}

#[tokio::test]
async fn test_short_asset_id_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .assets()
        .model_xml(12345)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidAssetId(12345)));
}

#[tokio::test]
async fn test_custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/stats"))
        .and(header("user-agent", "spore-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATS_XML))
        .expect(1)
        .mount(&server)
        .await;

    let client = SporeClient::builder()
        .base_url(server.uri())
        .user_agent("spore-tests/1.0")
        .build()
        .unwrap();
    client.daily_stats().await.unwrap();
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(STATS_XML)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = SporeClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    match client.daily_stats().await.unwrap_err() {
        Error::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport timeout, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Downloads
// ─────────────────────────────────────────────────────────────────────────────

fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend((0..len.saturating_sub(8)).map(|i| (i % 251) as u8));
    bytes
}

#[tokio::test]
async fn test_download_thumbnail_writes_exact_bytes() {
    let server = MockServer::start().await;
    let body = png_bytes(4096);
    serve(
        &server,
        "/static/thumb/500/267/423/500267423060.png",
        ResponseTemplate::new(200).set_body_bytes(body.clone()),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("bloop.png");

    let written = client_for(&server)
        .assets()
        .download_thumbnail(500267423060, &dest)
        .await
        .unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn test_download_large_image_overwrites_existing_file() {
    let server = MockServer::start().await;
    let body = png_bytes(16);
    serve(
        &server,
        "/static/image/123/456/789/123456789_lrg.png",
        ResponseTemplate::new(200).set_body_bytes(body.clone()),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("large.png");
    std::fs::write(&dest, vec![b'x'; 10_000]).unwrap();

    let written = client_for(&server)
        .assets()
        .download_large_image(123456789, &dest)
        .await
        .unwrap();

    assert_eq!(written, 16);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn test_failed_download_leaves_destination_untouched() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/static/thumb/123/456/789/123456789.png",
        ResponseTemplate::new(404),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("thumb.png");
    std::fs::write(&dest, b"previous").unwrap();

    let err = client_for(&server)
        .assets()
        .download_thumbnail(123456789, &dest)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(std::fs::read(&dest).unwrap(), b"previous");
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "no staging files may remain");
}

#[tokio::test]
async fn test_download_into_missing_directory_is_local_io_failure() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/static/thumb/123/456/789/123456789.png",
        ResponseTemplate::new(200).set_body_bytes(png_bytes(32)),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("missing").join("thumb.png");

    let err = client_for(&server)
        .assets()
        .download_thumbnail(123456789, &dest)
        .await
        .unwrap_err();

    match err {
        Error::LocalIoFailed { path, .. } => assert_eq!(path, dest),
        other => panic!("expected LocalIoFailed, got {other:?}"),
    }
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_download_model_xml_keeps_body_verbatim() {
    let server = MockServer::start().await;
    let body = "<?xml version=\"1.0\"?>\n<!-- exported -->\n<creature>\n\t<id>500267423060</id>\n</creature>\n";
    serve(
        &server,
        "/static/model/500/267/423/500267423060.xml",
        ResponseTemplate::new(200).set_body_string(body),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("500267423060.xml");

    let written = client_for(&server)
        .assets()
        .download_model_xml(500267423060, &dest)
        .await
        .unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), body);
}

#[cfg(unix)]
#[tokio::test]
async fn test_download_uses_regular_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    serve(
        &server,
        "/static/thumb/123/456/789/123456789.png",
        ResponseTemplate::new(200).set_body_bytes(png_bytes(64)),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("reference");
    std::fs::write(&reference, b"").unwrap();
    let dest = dir.path().join("thumb.png");

    client_for(&server)
        .assets()
        .download_thumbnail(123456789, &dest)
        .await
        .unwrap();

    let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&dest), mode(&reference));
}

#[cfg(unix)]
#[tokio::test]
async fn test_overwrite_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    serve(
        &server,
        "/static/image/123/456/789/123456789_lrg.png",
        ResponseTemplate::new(200).set_body_bytes(png_bytes(64)),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("large.png");
    std::fs::write(&dest, b"old").unwrap();
    std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o640)).unwrap();

    client_for(&server)
        .assets()
        .download_large_image(123456789, &dest)
        .await
        .unwrap();

    let mode = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    assert_eq!(std::fs::read(&dest).unwrap(), png_bytes(64));
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    let alice = "<user><name>alice</name></user>";
    let bob = "<user><name>bob</name></user>";
    Mock::given(method("GET"))
        .and(path("/rest/user/alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(alice)
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/user/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bob))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (users_a, users_b) = (client.users(), client.users());
    let (a, b) = tokio::join!(users_a.profile("alice"), users_b.profile("bob"));
    assert_eq!(a.unwrap(), XmlDocument::parse(alice.as_bytes()).unwrap());
    assert_eq!(b.unwrap(), XmlDocument::parse(bob.as_bytes()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            let name = if i % 2 == 0 { "alice" } else { "bob" };
            tokio::spawn(async move { (name, client.users().profile(name).await) })
        })
        .collect();

    for handle in handles {
        let (name, doc) = handle.await.unwrap();
        assert_eq!(doc.unwrap().child_text("name").as_deref(), Some(name));
    }
}
