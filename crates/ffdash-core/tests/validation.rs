//! Output-path validation rules.

use ffdash_core::{PathRejection, ReservedPath, Store, check_output_path, is_output_path_valid};
use ffdash_model::FfConfig;
use proptest::prelude::*;

fn configs() -> Vec<FfConfig> {
    vec![
        FfConfig::with_defaults("c1", "s1", "Job1", "/live/one"),
        FfConfig::with_defaults("c2", "s1", "Job2", "/live/two/"),
        FfConfig::with_defaults("c3", "s2", "Job3", "/live/three"),
    ]
}

#[test]
fn accepts_fresh_absolute_path() {
    assert!(is_output_path_valid("/live/four", "s1", None, &configs()));
}

#[test]
fn rejects_relative_path() {
    let err = check_output_path("relative/path", "s1", None, &configs()).unwrap_err();
    assert_eq!(err, PathRejection::NotAbsolute("relative/path".to_string()));
}

#[test]
fn rejects_empty_path() {
    let err = check_output_path("", "s1", None, &[]).unwrap_err();
    assert_eq!(err.rule(), "not-absolute");
}

#[test]
fn rejects_root() {
    let err = check_output_path("/", "s1", None, &[]).unwrap_err();
    assert!(matches!(
        err,
        PathRejection::Reserved {
            reserved: ReservedPath::Root,
            ..
        }
    ));
}

#[test]
fn rejects_reserved_prefixes() {
    for candidate in ["/api", "/api/", "/api/x", "/_nuxt/app.js", "/index.html", "/monitor/"] {
        let err = check_output_path(candidate, "s1", None, &[]).unwrap_err();
        assert_eq!(err.rule(), "reserved-prefix", "{candidate}");
    }
}

#[test]
fn reserved_name_as_longer_segment_is_allowed() {
    assert!(is_output_path_valid("/apiary", "s1", None, &[]));
    assert!(is_output_path_valid("/configs/live", "s1", None, &[]));
}

#[test]
fn rejects_traversal() {
    let err = check_output_path("/a/../b", "s1", None, &[]).unwrap_err();
    assert_eq!(err, PathRejection::Traversal("/a/../b".to_string()));
}

#[test]
fn rejects_duplicate_on_same_server() {
    let err = check_output_path("/live/one/", "s1", None, &configs()).unwrap_err();
    assert_eq!(
        err,
        PathRejection::Duplicate {
            path: "/live/one/".to_string(),
            config_uid: "c1".to_string(),
        }
    );
    // Stored output with a trailing slash still collides.
    assert!(!is_output_path_valid("/live/two", "s1", None, &configs()));
}

#[test]
fn same_path_on_other_server_is_allowed() {
    assert!(is_output_path_valid("/live/three", "s1", None, &configs()));
}

#[test]
fn editing_in_place_is_allowed() {
    assert!(is_output_path_valid("/live/one", "s1", Some("c1"), &configs()));
    // Excluding one config does not hide another's path.
    assert!(!is_output_path_valid("/live/two", "s1", Some("c1"), &configs()));
}

#[test]
fn store_checks_against_empty_snapshot() {
    let store = Store::new();
    assert!(store.is_output_path_valid("/live/one", "s1", None));
    assert!(!store.is_output_path_valid("/api", "s1", None));
}

fn output_path() -> impl Strategy<Value = String> {
    (
        "[a-z0-9]{1,6}",
        prop::collection::vec("[a-z0-9_-]{1,8}", 0..4),
    )
        .prop_map(|(head, rest)| {
            let mut path = format!("/out-{head}");
            for segment in rest {
                path.push('/');
                path.push_str(&segment);
            }
            path
        })
}

proptest! {
    #[test]
    fn duplicate_rejected_unless_editing_self(
        path in output_path(),
        stored_slash in any::<bool>(),
        candidate_slash in any::<bool>(),
    ) {
        let stored = if stored_slash { format!("{path}/") } else { path.clone() };
        let candidate = if candidate_slash { format!("{path}/") } else { path.clone() };
        let configs = vec![FfConfig::with_defaults("c1", "s1", "Job", stored)];

        let rejected = check_output_path(&candidate, "s1", None, &configs);
        let is_duplicate = matches!(rejected, Err(PathRejection::Duplicate { .. }));
        prop_assert!(is_duplicate);
        prop_assert!(!is_output_path_valid(&candidate, "s1", Some("c2"), &configs));
        prop_assert!(is_output_path_valid(&candidate, "s1", Some("c1"), &configs));
    }

    #[test]
    fn reserved_prefix_and_descendants_rejected(
        index in 0..ReservedPath::ALL.len(),
        suffix in "[a-z0-9/]{0,12}",
    ) {
        let reserved = ReservedPath::ALL[index];
        for candidate in [reserved.path().to_string(), format!("{}/{suffix}", reserved.path())] {
            let rejection = check_output_path(&candidate, "s1", None, &[]);
            prop_assert_eq!(
                rejection,
                Err(PathRejection::Reserved { path: candidate.clone(), reserved })
            );
        }
    }

    #[test]
    fn relative_paths_rejected(candidate in "[a-z][a-z0-9/]{0,12}") {
        prop_assert_eq!(
            check_output_path(&candidate, "s1", None, &[]),
            Err(PathRejection::NotAbsolute(candidate.clone()))
        );
    }

    #[test]
    fn parent_segments_rejected(head in output_path(), tail in "[a-z0-9]{1,6}") {
        let candidate = format!("{head}/../{tail}");
        prop_assert!(!is_output_path_valid(&candidate, "s1", None, &[]));
    }
}
