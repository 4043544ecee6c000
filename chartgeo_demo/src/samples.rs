// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample inputs for every chart kind.

use anyhow::Result;
use chartgeo_charts::{AreaChartSpec, Chart, ChartKind, GeomapSpec, LineChartSpec, Region};
use chartgeo_data::{Dataset, Series};
use hashbrown::HashMap;
use kurbo::BezPath;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn monthly() -> Result<Dataset> {
    Ok(Dataset::new(
        MONTHS,
        vec![
            Series::new("Rent", [820.0, 820.0, 820.0, 845.0, 845.0, 845.0]),
            Series::new("Food", [310.0, 285.0, 342.0, 298.0, 376.0, 331.0]),
            Series::new("Travel", [45.0, 120.0, 60.0, 410.0, 95.0, 230.0]),
        ],
    )?)
}

/// A made-up five-region country, in map coordinates.
const REGIONS: [(&str, &str, &str); 5] = [
    ("NW", "Northwest", "M20,20 L200,20 L180,160 L20,180 Z"),
    ("NE", "Northeast", "M200,20 L400,30 L390,170 L180,160 Z"),
    ("SW", "Southwest", "M20,180 L180,160 L170,330 L30,320 Z"),
    ("SE", "Southeast", "M180,160 L390,170 L380,340 L170,330 Z"),
    ("C", "Capital", "M150,140 L220,135 L225,190 L155,195 Z"),
];

fn geomap() -> Result<GeomapSpec> {
    let regions = REGIONS
        .iter()
        .map(|(id, name, d)| Ok(Region::new(*id, *name, BezPath::from_svg(d)?)))
        .collect::<Result<Vec<_>>>()?;
    let values: HashMap<String, f64> = [("NW", 1.8), ("NE", 3.1), ("SW", 0.9), ("C", 7.4)]
        .into_iter()
        .map(|(id, v)| (id.to_string(), v))
        .collect();
    Ok(GeomapSpec::new(regions, values))
}

/// Builds the sample chart for `kind`.
pub(crate) fn chart(kind: ChartKind, smooth: bool) -> Result<Chart> {
    Ok(match kind {
        ChartKind::Bar => Chart::bar(
            ["Q1", "Q2", "Q3", "Q4"],
            vec![
                Series::new("2023", [14.2, 18.9, 11.4, 21.7]),
                Series::new("2024", [16.8, 12.1, 19.5, 25.3]),
                Series::new("Delta", [2.6, -6.8, 8.1, 3.6]),
            ],
        )?,
        ChartKind::Line => Chart::Line(
            LineChartSpec::new(monthly()?)
                .with_smooth(smooth)
                .with_include_zero(true),
        ),
        ChartKind::Area => Chart::Area(
            AreaChartSpec::new(monthly()?)
                .with_smooth(smooth)
                .with_marker_size(6.0),
        ),
        ChartKind::Pie => Chart::pie([
            ("Chrome", 64.7),
            ("Safari", 18.6),
            ("Edge", 5.3),
            ("Firefox", 2.7),
            ("Other", 8.7),
        ]),
        ChartKind::Heatmap => Chart::heatmap(
            ["00h", "04h", "08h", "12h", "16h", "20h"],
            vec![
                Series::new("Mon", [2.0, 1.0, 14.0, 22.0, 19.0, 8.0]),
                Series::new("Tue", [3.0, 1.0, 17.0, 25.0, 21.0, 9.0]),
                Series::new("Wed", [2.0, 0.0, 15.0, 24.0, 23.0, 11.0]),
                Series::new("Thu", [4.0, 2.0, 16.0, 21.0, 20.0, 10.0]),
                Series::new("Fri", [5.0, 2.0, 12.0, 18.0, 26.0, 17.0]),
            ],
        )?,
        ChartKind::Geomap => Chart::Geomap(geomap()?),
        ChartKind::Treemap => Chart::treemap([
            ("src", 48_200.0),
            ("tests", 17_900.0),
            ("docs", 9_400.0),
            ("benches", 3_100.0),
            ("examples", 6_800.0),
            ("ci", 900.0),
            ("assets", 12_300.0),
        ]),
    })
}
