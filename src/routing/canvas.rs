//! The canvas route set.

use crate::routing::error::RouteResult;
use crate::routing::router::{RouteTable, RouteTableBuilder};

/// Register the canvas routes:
///
/// ```text
///     canvas_new GET /canvas/new     canvas#new
/// canvas_release GET /canvas/release canvas#release
///           root GET /               canvas#new
///        release GET /release        canvas#release
/// ```
pub fn draw_canvas_routes(builder: &mut RouteTableBuilder) -> RouteResult<()> {
    builder.namespace("canvas", |canvas| {
        canvas.get("new")?.get("release")?;
        Ok(())
    })?;

    builder
        .get("/", "canvas#new")?
        .get("/release", "canvas#release")?;
    Ok(())
}

/// The canvas routes alone, frozen.
pub fn canvas_routes() -> RouteResult<RouteTable> {
    let mut builder = RouteTable::builder();
    draw_canvas_routes(&mut builder)?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::HttpMethod;

    #[test]
    fn test_canvas_route_set() {
        let table = canvas_routes().unwrap();
        let rows: Vec<_> = table
            .entries()
            .iter()
            .map(|e| (e.name().unwrap_or(""), e.pattern().as_str(), e.handler().as_str()))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("canvas_new", "/canvas/new", "canvas#new"),
                ("canvas_release", "/canvas/release", "canvas#release"),
                ("root", "/", "canvas#new"),
                ("release", "/release", "canvas#release"),
            ]
        );
        assert!(table.entries().iter().all(|e| e.method() == HttpMethod::Get));
        assert!(table.shadowed().is_empty());
    }
}
