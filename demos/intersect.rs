//! Planimetry intersection demo: prints the intersections of a few shape pairs.
//!
//! Usage:
//! ```text
//! cargo run --example intersect                  # every scenario
//! cargo run --example intersect -- circles       # one scenario
//! RUST_LOG=planimetry=trace cargo run --example intersect
//! ```

use planimetry::{Circle, Intersectable, Line, Point, Polygon, Ray, Result, Segment, Shape, Triangle};

fn p(x: f64, y: f64) -> Result<Point> {
    Point::new(x, y)
}

fn lines() -> Result<Vec<(Shape, Shape)>> {
    let diagonal = Line::new(p(0.0, 0.0)?, p(1.0, 1.0)?)?;
    Ok(vec![
        (diagonal.into(), Line::new(p(0.0, 1.0)?, p(1.0, 2.0)?)?.into()),
        (diagonal.into(), Line::new(p(0.0, 2.0)?, p(2.0, 0.0)?)?.into()),
        (
            Segment::new(p(0.0, 0.0)?, p(10.0, 0.0)?)?.into(),
            Line::new(p(5.0, -1.0)?, p(5.0, 1.0)?)?.into(),
        ),
        (
            Ray::new(p(0.0, 0.0)?, p(1.0, 0.0)?)?.into(),
            Ray::new(p(5.0, 0.0)?, p(4.0, 0.0)?)?.into(),
        ),
    ])
}

fn circles() -> Result<Vec<(Shape, Shape)>> {
    let base = Circle::new(p(0.0, 0.0)?, 5.0)?;
    Ok(vec![
        (base.into(), Circle::new(p(10.0, 0.0)?, 5.0)?.into()),
        (base.into(), Circle::new(p(11.0, 0.0)?, 5.0)?.into()),
        (base.into(), Circle::new(p(9.0, 0.0)?, 5.0)?.into()),
        (base.into(), Line::new(p(0.0, 3.0)?, p(1.0, 3.0)?)?.into()),
    ])
}

fn polygons() -> Result<Vec<(Shape, Shape)>> {
    let diamond = Polygon::new(vec![p(-10.0, 0.0)?, p(0.0, -10.0)?, p(10.0, 0.0)?, p(0.0, 10.0)?])?;
    let triangle = Triangle::new(p(0.0, 0.0)?, p(8.0, 0.0)?, p(0.0, 6.0)?)?;
    Ok(vec![
        (diamond.clone().into(), p(0.0, 0.0)?.into()),
        (diamond.clone().into(), Line::new(p(-1.0, 0.0)?, p(1.0, 0.0)?)?.into()),
        (diamond.into(), triangle.clone().into()),
        (triangle.into(), Circle::new(p(-3.0, -4.0)?, 5.0)?.into()),
    ])
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planimetry.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planimetry=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planimetry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "all".to_owned());
    let pairs = match scenario.as_str() {
        "lines" => lines()?,
        "circles" => circles()?,
        "polygons" => polygons()?,
        _ => {
            let mut all = lines()?;
            all.extend(circles()?);
            all.extend(polygons()?);
            all
        }
    };

    for (a, b) in &pairs {
        match a.get_intersect(b)? {
            Some(found) => println!("{} x {}: {found}", a.kind(), b.kind()),
            None => println!("{} x {}: none", a.kind(), b.kind()),
        }
    }
    Ok(())
}
