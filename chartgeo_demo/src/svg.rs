// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of chart geometry.
//!
//! Everything here is markup: the geometry has already been computed by `chartgeo_charts`.

use chartgeo_charts::{
    AreaChartGeometry, AxisFrame, BarChartGeometry, ChartConfig, ChartGeometry, ChartLayout,
    ColorScheme, GeomapGeometry, HeatmapGeometry, LineChartGeometry, PieChartGeometry,
    TreemapChartGeometry, hex,
};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

const FONT_SIZE: f64 = 10.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_STEP: f64 = 110.0;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// An SVG document under construction.
#[derive(Debug)]
pub(crate) struct SvgDocument {
    view: Rect,
    background: Color,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(view: Rect, background: Color) -> Self {
        Self {
            view,
            background,
            body: String::new(),
        }
    }

    pub(crate) fn rect(
        &mut self,
        rect: Rect,
        fill: Color,
        opacity: Option<f64>,
        stroke: Option<Color>,
    ) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_paint_attr(&mut self.body, "fill", Some(fill));
        if let Some(o) = opacity {
            self.body.push_str(&format!(r#" fill-opacity="{o}""#));
        }
        if let Some(stroke) = stroke {
            write_paint_attr(&mut self.body, "stroke", Some(stroke));
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn path(
        &mut self,
        path: &BezPath,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) {
        let d = path.to_svg();
        self.body.push_str(&format!(r#"<path d="{d}""#));
        write_paint_attr(&mut self.body, "fill", fill);
        if let Some((color, width)) = stroke {
            write_paint_attr(&mut self.body, "stroke", Some(color));
            self.body.push_str(&format!(r#" stroke-width="{width}""#));
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, stroke: Color) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            from.x, from.y, to.x, to.y
        ));
        write_paint_attr(&mut self.body, "stroke", Some(stroke));
        self.body.push_str(r#" stroke-width="1"/>"#);
        self.body.push('\n');
    }

    pub(crate) fn text(&mut self, pos: Point, anchor: Anchor, fill: Color, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" font-family="sans-serif" dominant-baseline="middle" text-anchor="{}""#,
            pos.x,
            pos.y,
            anchor.as_str()
        ));
        write_paint_attr(&mut self.body, "fill", Some(fill));
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            hex(self.background)
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Serializes one chart.
pub(crate) fn render(geometry: &ChartGeometry, config: &ChartConfig) -> String {
    let scheme = &config.scheme;
    match geometry {
        ChartGeometry::Bar(g) => render_bar(g, scheme),
        ChartGeometry::Line(g) => render_line(g, scheme),
        ChartGeometry::Area(g) => render_area(g, scheme),
        ChartGeometry::Pie(g) => render_pie(g, scheme),
        ChartGeometry::Heatmap(g) => render_heatmap(g, scheme),
        ChartGeometry::Geomap(g) => render_geomap(g, scheme),
        ChartGeometry::Treemap(g) => render_treemap(g, scheme),
    }
}

fn render_bar(g: &BarChartGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.frame.layout.view, scheme.background);
    draw_axes(&mut doc, &g.frame, scheme);
    for bar in &g.bars {
        doc.rect(bar.rect, bar.color, None, None);
    }
    let labels: Vec<(String, Color)> = g
        .series
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), scheme.color(i)))
        .collect();
    draw_legend(&mut doc, &g.frame.layout, &labels, scheme);
    doc.to_svg_string()
}

fn render_line(g: &LineChartGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.frame.layout.view, scheme.background);
    draw_axes(&mut doc, &g.frame, scheme);
    for line in &g.series {
        doc.path(&line.path, None, Some((line.color, 2.0)));
        if line.symbol.is_filled() {
            doc.path(&line.markers, Some(line.color), None);
        } else {
            doc.path(&line.markers, Some(scheme.background), Some((line.color, 1.5)));
        }
    }
    let labels: Vec<(String, Color)> = g
        .series
        .iter()
        .map(|s| (s.label.clone(), s.color))
        .collect();
    draw_legend(&mut doc, &g.frame.layout, &labels, scheme);
    doc.to_svg_string()
}

fn render_area(g: &AreaChartGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.frame.layout.view, scheme.background);
    draw_axes(&mut doc, &g.frame, scheme);
    for layer in &g.layers {
        doc.path(&layer.fill, Some(layer.color), None);
        doc.path(&layer.outline, None, Some((scheme.background, 1.0)));
        if !layer.markers.elements().is_empty() {
            doc.path(&layer.markers, Some(layer.color), Some((scheme.background, 1.0)));
        }
    }
    let labels: Vec<(String, Color)> = g
        .layers
        .iter()
        .map(|l| (l.label.clone(), l.color))
        .collect();
    draw_legend(&mut doc, &g.frame.layout, &labels, scheme);
    doc.to_svg_string()
}

fn render_pie(g: &PieChartGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.layout.view, scheme.background);
    for wedge in &g.wedges {
        doc.path(&wedge.path, Some(wedge.color), Some((scheme.background, 1.0)));
    }
    for wedge in &g.wedges {
        let text = wedge.slice.value.to_string();
        doc.text(wedge.label_anchor, Anchor::Middle, scheme.background, &text);
    }
    let labels: Vec<(String, Color)> = g
        .wedges
        .iter()
        .map(|w| (w.slice.label.clone(), w.color))
        .collect();
    draw_legend(&mut doc, &g.layout, &labels, scheme);
    doc.to_svg_string()
}

fn render_heatmap(g: &HeatmapGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.layout.view, scheme.background);
    for cell in &g.cells {
        doc.rect(cell.rect, g.color, Some(cell.intensity), Some(scheme.background));
    }
    let plot = g.layout.plot;
    for row in &g.rows {
        doc.text(
            Point::new(plot.x0 - 5.0, row.position),
            Anchor::End,
            scheme.foreground,
            &row.label,
        );
    }
    for column in &g.columns {
        doc.text(
            Point::new(column.position, plot.y1 + 15.0),
            Anchor::Middle,
            scheme.foreground,
            &column.label,
        );
    }
    doc.line(
        Point::new(plot.x0, plot.y1),
        Point::new(plot.x1, plot.y1),
        scheme.dark_grid,
    );
    doc.line(
        Point::new(plot.x0, plot.y0),
        Point::new(plot.x0, plot.y1),
        scheme.dark_grid,
    );
    doc.to_svg_string()
}

fn render_geomap(g: &GeomapGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.view.inflate(10.0, 10.0), scheme.background);
    for region in &g.regions {
        doc.path(&region.outline, Some(scheme.background), Some((scheme.light_grid, 0.5)));
        if let Some(intensity) = region.intensity {
            #[allow(clippy::cast_possible_truncation, reason = "opacity needs no f64 precision")]
            let shade = g.color.multiply_alpha(intensity as f32);
            doc.path(&region.outline, Some(shade), None);
        }
    }
    for region in &g.regions {
        let text = match region.value {
            Some(v) => format!("{} ({v})", region.name),
            None => region.name.clone(),
        };
        doc.text(region.label_anchor, Anchor::Middle, scheme.foreground, &text);
    }
    doc.to_svg_string()
}

fn render_treemap(g: &TreemapChartGeometry, scheme: &ColorScheme) -> String {
    let mut doc = SvgDocument::new(g.layout.view, scheme.background);
    for tile in &g.tiles {
        doc.rect(tile.cell.rect, tile.color, None, Some(scheme.background));
        let r = tile.cell.rect;
        doc.text(
            Point::new(r.x0 + 8.0, r.y0 + 12.0),
            Anchor::Start,
            scheme.background,
            &format!("{} ({})", tile.cell.label, tile.cell.value),
        );
    }
    doc.to_svg_string()
}

fn draw_axes(doc: &mut SvgDocument, frame: &AxisFrame, scheme: &ColorScheme) {
    let plot = frame.layout.plot;
    for tick in &frame.y_ticks {
        doc.line(
            Point::new(plot.x0, tick.pixel),
            Point::new(plot.x1, tick.pixel),
            scheme.light_grid,
        );
        doc.text(
            Point::new(plot.x0 - 5.0, tick.pixel),
            Anchor::End,
            scheme.foreground,
            &tick.label,
        );
    }
    for tick in &frame.x_ticks {
        doc.text(
            Point::new(tick.position, plot.y1 + 15.0),
            Anchor::Middle,
            scheme.foreground,
            &tick.label,
        );
    }
    doc.line(
        Point::new(plot.x0, plot.y1),
        Point::new(plot.x1, plot.y1),
        scheme.dark_grid,
    );
    doc.line(
        Point::new(plot.x0, plot.y0),
        Point::new(plot.x0, plot.y1),
        scheme.dark_grid,
    );
}

fn draw_legend(
    doc: &mut SvgDocument,
    layout: &ChartLayout,
    entries: &[(String, Color)],
    scheme: &ColorScheme,
) {
    let header = layout.header;
    let y = header.y0 + 0.5 * header.height();
    let mut x = header.x0 + 10.0;
    for (label, color) in entries {
        let swatch = Rect::from_origin_size(
            (x, y - 0.5 * LEGEND_SWATCH),
            (LEGEND_SWATCH, LEGEND_SWATCH),
        );
        doc.rect(swatch, *color, None, None);
        doc.text(
            Point::new(x + LEGEND_SWATCH + 4.0, y),
            Anchor::Start,
            scheme.foreground,
            label,
        );
        x += LEGEND_STEP;
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    let Some(color) = color else {
        out.push_str(&format!(r#" {name}="none""#));
        return;
    };
    let rgba = color.to_rgba8();
    out.push_str(&format!(r#" {name}="{}""#, hex(color)));
    if rgba.a != 255 {
        out.push_str(&format!(r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml(r#"R&D <"q">"#), "R&amp;D &lt;&quot;q&quot;&gt;");
    }

    #[test]
    fn translucent_paint_gets_an_opacity() {
        let mut out = String::new();
        write_paint_attr(&mut out, "fill", Some(Color::from_rgba8(255, 0, 0, 51)));
        assert_eq!(out, r##" fill="#FF0000" fill-opacity="0.2""##);
    }

    #[test]
    fn document_wraps_the_body() {
        let mut doc = SvgDocument::new(Rect::new(0.0, 0.0, 20.0, 10.0), Color::WHITE);
        doc.line(Point::new(0.0, 5.0), Point::new(20.0, 5.0), Color::BLACK);
        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<svg "), "{svg}");
        assert!(svg.contains(r#"viewBox="0 0 20 10""#), "{svg}");
        assert!(svg.contains("<line x1=\"0\" y1=\"5\""), "{svg}");
        assert!(svg.ends_with("</svg>\n"));
    }
}
