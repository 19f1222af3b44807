mod common;

use common::{FakeApi, server, synchronizer};
use ffdash_core::{FALLBACK_BASE_URL, ManifestKind, playback_url};
use ffdash_model::FfConfig;

#[test]
fn unknown_server_falls_back_to_localhost() {
    let config = FfConfig::with_defaults("c1", "missing", "Job", "/o");
    assert_eq!(
        playback_url(&config, &[], ManifestKind::Dash),
        "http://localhost/o/manifest.mpd"
    );
    assert!(playback_url(&config, &[], ManifestKind::Hls).starts_with(FALLBACK_BASE_URL));
}

#[test]
fn joins_with_single_slash() {
    let servers = [server("s1", "One", "http://cdn.example.com/")];
    for output in ["/live/a", "/live/a/", "live/a"] {
        let config = FfConfig::with_defaults("c1", "s1", "Job", output);
        assert_eq!(
            playback_url(&config, &servers, ManifestKind::Hls),
            "http://cdn.example.com/live/a/playlist.m3u8",
            "{output}"
        );
    }
}

#[test]
fn root_or_empty_output_joins_with_single_slash() {
    for output in ["/", ""] {
        let config = FfConfig::with_defaults("c1", "missing", "Job", output);
        assert_eq!(
            playback_url(&config, &[], ManifestKind::Dash),
            "http://localhost/manifest.mpd",
            "{output:?}"
        );
    }
    let servers = [server("s1", "One", "http://cdn.example.com/")];
    let config = FfConfig::with_defaults("c1", "s1", "Job", "/");
    assert_eq!(
        playback_url(&config, &servers, ManifestKind::Hls),
        "http://cdn.example.com/playlist.m3u8"
    );
}

#[test]
fn manifest_names() {
    assert_eq!(ManifestKind::Dash.file_name(), "manifest.mpd");
    assert_eq!(ManifestKind::Hls.file_name(), "playlist.m3u8");
}

#[tokio::test]
async fn store_urls_follow_server_snapshot() {
    let api = FakeApi::new();
    api.add_server("s1", "One", "http://one.local:8080");
    api.seed_config(FfConfig::with_defaults("c1", "s1", "Job", "/live"));
    let sync = synchronizer(&api);
    sync.refresh_all().await.unwrap();

    let store = sync.store();
    let config = store.find_config("c1").unwrap();
    assert_eq!(store.dash_url(&config), "http://one.local:8080/live/manifest.mpd");
    assert_eq!(store.hls_url(&config), "http://one.local:8080/live/playlist.m3u8");

    sync.remove_server("s1").await.unwrap();
    assert_eq!(store.dash_url(&config), "http://localhost/live/manifest.mpd");
}

#[tokio::test]
async fn configs_for_server_filters_by_owner() {
    let api = FakeApi::new();
    api.seed_config(FfConfig::with_defaults("c1", "s1", "A", "/a"));
    api.seed_config(FfConfig::with_defaults("c2", "s2", "B", "/b"));
    api.seed_config(FfConfig::with_defaults("c3", "s1", "C", "/c"));
    let sync = synchronizer(&api);
    sync.refresh_configs().await.unwrap();

    let uids: Vec<_> = sync
        .store()
        .configs_for_server("s1")
        .into_iter()
        .map(|c| c.uid)
        .collect();
    assert_eq!(uids, ["c1", "c3"]);
}
