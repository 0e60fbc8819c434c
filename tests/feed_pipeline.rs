//! End-to-end pipeline tests: HTTP fetch -> parse -> classify, against a
//! mock feed server.

use seismap::config::FeedConfig;
use seismap::error::FeedError;
use seismap::feed::{FeedLoader, GeoPoint};
use seismap::marker::{MarkerSet, SeverityBucket};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:georss="http://www.georss.org/georss">
<title>USGS Magnitude 4.5+ Earthquakes, Past Day</title>
<updated>2026-08-27T00:00:00Z</updated>
<entry>
    <title>M 5.2 - 10 km W of Los Angeles, CA</title>
    <georss:point>34.05 -118.25</georss:point>
    <georss:elev>-12000</georss:elev>
</entry>
<entry>
    <title>M 4.6 - offshore, no coordinates published</title>
    <georss:elev>-8000</georss:elev>
</entry>
<entry>
    <title>M 6.0 - Fiji region</title>
    <georss:point>-17.83 178.12</georss:point>
    <georss:elev>-550000</georss:elev>
</entry>
</feed>"#;

async fn mock_feed(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.atom"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_parse_classify() {
    let server = mock_feed(FIXTURE, 200).await;
    let loader = FeedLoader::new(FeedConfig::with_url(format!("{}/feed.atom", server.uri())));

    let events = loader.load().await.unwrap();
    // The entry without a point is filtered, the rest survive in feed order.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location, GeoPoint::new(34.05, -118.25));
    assert_eq!(events[0].magnitude, Some(5.2));
    assert_eq!(events[0].depth_km, 12.0);

    let set = MarkerSet::from_events(&events);
    assert_eq!(set.markers()[0].bucket, SeverityBucket::Medium);
    assert_eq!(set.markers()[1].bucket, SeverityBucket::Strong);

    let legend = set.legend();
    assert_eq!(legend.total, 2);
    assert_eq!(
        legend
            .rows
            .iter()
            .find(|r| r.bucket == SeverityBucket::Medium)
            .unwrap()
            .count,
        1
    );
}

#[tokio::test]
async fn test_popup_lookup_after_fetch() {
    let server = mock_feed(FIXTURE, 200).await;
    let loader = FeedLoader::new(FeedConfig::with_url(format!("{}/feed.atom", server.uri())));
    let events = loader.load().await.unwrap();
    let set = MarkerSet::from_events(&events);

    let hit = set.at(GeoPoint::new(-17.83, 178.12)).unwrap();
    assert_eq!(hit.magnitude, Some(6.0));
    assert_eq!(hit.depth_km, 550.0);
    assert_eq!(hit.title.as_deref(), Some("M 6.0 - Fiji region"));
}

#[tokio::test]
async fn test_server_error_is_unreachable() {
    let server = mock_feed("oops", 500).await;
    let loader = FeedLoader::new(FeedConfig::with_url(format!("{}/feed.atom", server.uri())));
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, FeedError::Unreachable { .. }));
}

#[tokio::test]
async fn test_unreachable_host() {
    // Nothing listens here; transport failure maps to Unreachable.
    let loader = FeedLoader::new(FeedConfig::with_url("http://127.0.0.1:1/feed.atom"));
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, FeedError::Unreachable { .. }));
}

#[tokio::test]
async fn test_strict_policy_over_http() {
    let bad = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:georss="http://www.georss.org/georss">
<entry>
    <title>M 5.2 - somewhere</title>
    <georss:point>10.0 20.0</georss:point>
    <georss:elev>not-a-number</georss:elev>
</entry>
</feed>"#;
    let server = mock_feed(bad, 200).await;
    let url = format!("{}/feed.atom", server.uri());

    let strict = FeedLoader::new(FeedConfig::with_url(&url).strict());
    assert!(matches!(
        strict.load().await.unwrap_err(),
        FeedError::MalformedField { field: "georss:elev", .. }
    ));

    let lenient = FeedLoader::new(FeedConfig::with_url(&url));
    let events = lenient.load().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].depth_km, 0.0);
}

#[test]
fn test_offline_parse_path() {
    let loader = FeedLoader::new(FeedConfig::default());
    let events = loader.load_str(FIXTURE).unwrap();
    assert_eq!(events.len(), 2);
}
