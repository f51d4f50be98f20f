//! End-to-end dispatch behaviour through the public API.

use pattern_mux::strategy::{
    Identity, PathTrim, PreferFirstRegistered, PreferLastRegistered, PreferShortestPattern,
    Prefix, Strict,
};
use pattern_mux::{presets, Mux, MuxBuilder};

mod common;

#[test]
fn test_path_scenario() {
    let mux = presets::path();
    mux.bind("/", "root");
    mux.bind("/api/", "api");

    let mut all = mux.lookup_all("/api/users").unwrap();
    all.sort_by_key(|hit| hit.score);
    let scored: Vec<_> = all.iter().map(|h| (h.pattern.as_str(), h.score)).collect();
    assert_eq!(scored, vec![("/", 1), ("/api/", 5)]);

    let hit = mux.lookup("/api/users").unwrap().unwrap();
    assert_eq!((hit.pattern.as_str(), hit.value), ("/api/", "api"));

    assert_eq!(mux.lookup("/other").unwrap().unwrap().value, "root");

    let hit = mux.lookup("other").unwrap().unwrap();
    assert_eq!(hit.pattern, "/");
    assert_eq!(hit.value, "root");
}

#[test]
fn test_route_fixture() {
    let mux = common::route_table();
    let resolved = common::resolve_all(&mux);
    assert_eq!(
        resolved,
        vec![
            Some("index"),  // "/"
            Some("index"),  // ""
            Some("index"),  // "/api" is not under "/api/"
            Some("api"),
            Some("users"),
            Some("api-v1"), // "/api/v1/users" has no trailing slash
            Some("api-v1"),
            Some("static"),
            Some("health"),
            Some("index"),
            Some("index"),
        ]
    );
}

#[test]
fn test_lookup_agrees_with_lookup_all() {
    let mux = common::route_table();
    for query in common::QUERIES {
        let best = mux.lookup(query).unwrap();
        let all = mux.lookup_all(query).unwrap();
        match best {
            None => assert!(all.is_empty(), "query {query:?}"),
            Some(best) => {
                assert!(all.contains(&best), "query {query:?}");
                let max = all.iter().map(|h| h.score).max().unwrap();
                assert_eq!(best.score, max, "query {query:?}");
            }
        }
    }
}

#[test]
fn test_idempotent_registration() {
    let mux = presets::path();
    mux.bind("/a", 1);
    mux.bind("a", 2);
    assert_eq!(mux.len(), 1);
    assert_eq!(mux.lookup("/a").unwrap().unwrap().value, 2);
}

#[test]
fn test_unbind_absent_is_noop() {
    let mux: Mux<u8> = presets::path();
    assert_eq!(mux.unbind("/never"), None);
    mux.bind("/x", 1);
    assert_eq!(mux.unbind("/y"), None);
    assert_eq!(mux.len(), 1);
}

#[test]
fn test_empty_table_matches_nothing() {
    let tables: Vec<Mux<u8>> = vec![
        Mux::new(),
        presets::path(),
        presets::prefix(),
        presets::suffix(),
        presets::regex(),
    ];
    for mux in &tables {
        for query in ["", "/", "anything"] {
            assert!(mux.lookup(query).unwrap().is_none());
            assert!(mux.lookup_all(query).unwrap().is_empty());
        }
    }
}

#[test]
fn test_first_and_last_registered() {
    // "a" and the empty prefix both match "abc"; only the tie-break differs
    let first = MuxBuilder::new()
        .matcher(PreferFirstRegistered::new(Prefix))
        .build();
    let last = MuxBuilder::new()
        .matcher(PreferLastRegistered::new(Prefix))
        .build();
    for mux in [&first, &last] {
        mux.bind("a", "a");
        mux.bind("", "b");
    }

    assert_eq!(first.lookup("abc").unwrap().unwrap().value, "a");
    assert_eq!(last.lookup("abc").unwrap().unwrap().value, "b");
}

#[test]
fn test_first_registered_survives_rebind() {
    let mux = MuxBuilder::new()
        .matcher(PreferFirstRegistered::new(Prefix))
        .build();
    mux.bind("/", "root");
    mux.bind("/docs", "docs");
    mux.bind("/docs", "docs-v2");
    mux.bind("/", "root-v2");

    let hit = mux.lookup("/docs/intro").unwrap().unwrap();
    assert_eq!(hit.value, "root-v2");
}

#[test]
fn test_shortest_pattern() {
    let mux = Mux::with_strategies(
        Box::new(PathTrim),
        Box::new(PathTrim),
        Box::new(PreferShortestPattern::new(Prefix)),
    );
    mux.bind("/a", 1);
    mux.bind("/ab", 2);
    assert_eq!(mux.lookup("abc").unwrap().unwrap().value, 1);
}

#[test]
fn test_strict_is_default() {
    let defaults: Vec<Mux<u8>> = vec![Mux::new(), Mux::default(), MuxBuilder::new().build()];
    for mux in &defaults {
        mux.bind("/exact", 1);
        mux.bind("Case", 2);
        // identity trims: nothing is rooted or lowercased
        assert!(!mux.contains("exact"));
        assert!(mux.lookup("exact").unwrap().is_none());
        assert!(mux.lookup("case").unwrap().is_none());
        // strict matcher: no prefix semantics, constant score
        assert!(mux.lookup("/exact/").unwrap().is_none());
        assert!(mux.lookup("/ex").unwrap().is_none());
        let hit = mux.lookup("/exact").unwrap().unwrap();
        assert_eq!((hit.value, hit.score), (1, 0));
        assert_eq!(mux.lookup("Case").unwrap().unwrap().score, 0);
    }
}

#[test]
fn test_explicit_strict_triple() {
    let mux = Mux::with_strategies(Box::new(Identity), Box::new(Identity), Box::new(Strict));
    mux.bind("/exact", 1);
    assert!(mux.lookup("/exact/").unwrap().is_none());
    assert_eq!(mux.lookup("/exact").unwrap().unwrap().value, 1);
}
