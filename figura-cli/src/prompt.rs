use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail, ensure};
use figura::geometry::ShapeCollection;
use figura::geometry::primitives::{Diamond, Point, Rectangle, Triangle};
use figura::geometry::validate_scale_factor;
use figura::report::ReportConfig;
use figura::text::tokenize;
use log::{debug, info};

/// Pivot and factor of a scaling requested by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRequest {
    pub pivot: Point,
    pub k: f64,
}

/// The collection the prompt operates on.
pub fn demo_shapes() -> Result<ShapeCollection> {
    let mut shapes = ShapeCollection::new();
    shapes.push(Rectangle::try_new(Point(5.0, 5.0), 10.0, 5.0)?);
    shapes.push(Diamond::try_new(Point(20.0, 5.0), 10.0, 10.0)?);
    shapes.push(Triangle::try_new(
        Point(0.0, 0.0),
        Point(5.0, 10.0),
        Point(10.0, 0.0),
    )?);
    Ok(shapes)
}

/// Reads the pivot's x and y coordinates followed by the scale factor, separated by any whitespace
/// (possibly spread over several lines).
///
/// Fails on missing or malformed numbers and on a negative or non-finite scale factor.
pub fn parse_scale_request(input: impl BufRead) -> Result<ScaleRequest> {
    const FIELDS: [&str; 3] = ["pivot x coordinate", "pivot y coordinate", "scale factor"];

    let mut values = Vec::with_capacity(FIELDS.len());
    let mut lines = input.lines();
    while values.len() < FIELDS.len() {
        let Some(line) = lines.next() else {
            bail!("missing {}", FIELDS[values.len()]);
        };
        let line = line.context("could not read input")?;
        for token in tokenize(&line) {
            ensure!(
                values.len() < FIELDS.len(),
                "unexpected trailing input: '{token}'"
            );
            let field = FIELDS[values.len()];
            let value = token
                .parse::<f64>()
                .with_context(|| format!("invalid {field}: '{token}'"))?;
            values.push(value);
        }
    }

    let (x, y, k) = (values[0], values[1], values[2]);
    ensure!(
        x.is_finite() && y.is_finite(),
        "pivot coordinates must be finite numbers, got ({x}, {y})"
    );
    validate_scale_factor(k)?;

    debug!("parsed scale request: pivot ({x}, {y}), k = {k}");
    Ok(ScaleRequest {
        pivot: Point(x, y),
        k,
    })
}

/// Writes the report of `shapes`, scales all of them about the requested pivot and writes the report again.
/// Nothing is written when the scaling fails.
pub fn scale_and_report(
    shapes: &mut ShapeCollection,
    request: ScaleRequest,
    config: ReportConfig,
    out: &mut impl Write,
) -> Result<()> {
    let before = shapes.report(config);
    shapes.scale_about_point(request.pivot, request.k)?;
    info!(
        "[PROMPT] scaled {} shapes by {} about ({}, {})",
        shapes.len(),
        request.k,
        request.pivot.0,
        request.pivot.1
    );

    writeln!(out, "Before scaling:")?;
    write!(out, "{before}")?;
    writeln!(out, "After scaling:")?;
    write!(out, "{}", shapes.report(config))?;
    Ok(())
}

/// Reads a [`ScaleRequest`] from `input` and, if valid, applies it to `shapes` and writes both reports to `out`.
/// Nothing is written and no shape is modified when the request is invalid or its result overflows.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    shapes: &mut ShapeCollection,
    config: ReportConfig,
) -> Result<()> {
    let request = parse_scale_request(input)?;
    scale_and_report(shapes, request, config, out)
}
