//! Resolution behaviour of the canvas route table.

use canvas_router::config::{parse_config, RouterConfig};
use canvas_router::lifecycle::startup::build_route_table;
use canvas_router::routing::{canvas_routes, HttpMethod, RouteError, RouteTable};

#[test]
fn test_observed_routes_resolve() {
    let table = canvas_routes().unwrap();

    let cases = [
        ("/", "canvas#new"),
        ("/release", "canvas#release"),
        ("/canvas/new", "canvas#new"),
        ("/canvas/release", "canvas#release"),
    ];
    for (path, expected) in cases {
        assert_eq!(
            table.resolve(HttpMethod::Get, path).unwrap().as_str(),
            expected,
            "GET {path}"
        );
    }
}

#[test]
fn test_unmatched_requests_are_not_found() {
    let table = canvas_routes().unwrap();

    assert_eq!(
        table.resolve(HttpMethod::Post, "/"),
        Err(RouteError::NotFound {
            method: "POST".into(),
            path: "/".into(),
        })
    );
    assert_eq!(
        table.resolve(HttpMethod::Get, "/unknown"),
        Err(RouteError::NotFound {
            method: "GET".into(),
            path: "/unknown".into(),
        })
    );
    assert!(table.resolve(HttpMethod::Delete, "/canvas/new").is_err());
}

#[test]
fn test_resolve_is_idempotent() {
    let table = canvas_routes().unwrap();
    let first = table.resolve(HttpMethod::Get, "/release").cloned();
    for _ in 0..100 {
        assert_eq!(table.resolve(HttpMethod::Get, "/release").cloned(), first);
    }
}

#[test]
fn test_earliest_registration_wins() {
    let mut builder = RouteTable::builder();
    builder.register("GET", "/", "canvas#new").unwrap();
    builder.register("GET", "/", "canvas#release").unwrap();
    let table = builder.build();

    assert_eq!(table.resolve(HttpMethod::Get, "/").unwrap().as_str(), "canvas#new");
    assert_eq!(table.shadowed().len(), 1);
}

#[test]
fn test_paths_are_normalized() {
    let table = canvas_routes().unwrap();
    assert_eq!(
        table.resolve(HttpMethod::Get, "/canvas/new/").unwrap().as_str(),
        "canvas#new"
    );
    assert_eq!(
        table.resolve(HttpMethod::Get, "/release?draft=true").unwrap().as_str(),
        "canvas#release"
    );
    assert!(table.resolve(HttpMethod::Get, "/Canvas/New").is_err());
}

#[test]
fn test_table_is_shareable_across_threads() {
    let table = std::sync::Arc::new(canvas_routes().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = table.clone();
            std::thread::spawn(move || {
                table.resolve(HttpMethod::Get, "/canvas/release").unwrap().to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "canvas#release");
    }
}

#[test]
fn test_config_routes_extend_table() {
    let config: RouterConfig = parse_config(
        r#"
        [[routes]]
        method = "POST"
        path = "/canvas/release"
        to = "canvas#release"
        name = "publish_canvas"
        "#,
    )
    .unwrap();

    let table = build_route_table(&config).unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(
        table.resolve(HttpMethod::Post, "/canvas/release").unwrap().as_str(),
        "canvas#release"
    );
    assert_eq!(table.path_for("publish_canvas"), Some("/canvas/release"));
}
