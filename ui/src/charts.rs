//! Small inline-SVG charts.
//!
//! Layout math lives in plain functions so it can be checked without a
//! renderer; the components only turn shapes into elements.

use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use crate::format::format_currency;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;
const GRID_LINES: usize = 4;

/// Slice colors, cycled by index.
pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// How tooltip values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Plain,
    Currency,
}

impl ValueFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            ValueFormat::Plain => value.to_string(),
            ValueFormat::Currency => format_currency(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn with_left_margin(left: f64) -> Self {
        Self {
            left,
            top: 16.0,
            width: WIDTH - left - 16.0,
            height: HEIGHT - 16.0 - 40.0,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Arc {
    path: String,
    label_x: f64,
    label_y: f64,
}

fn scale_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 { max } else { 1.0 }
}

fn vertical_bars(values: &[f64], plot: Plot) -> Vec<Bar> {
    let max = scale_max(values.iter().copied());
    let slot = plot.width / values.len().max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let height = value.max(0.0) / max * plot.height;
            Bar {
                x: plot.left + i as f64 * slot + slot * 0.2,
                y: plot.bottom() - height,
                width: slot * 0.6,
                height,
            }
        })
        .collect()
}

fn horizontal_bars(values: &[f64], plot: Plot) -> Vec<Bar> {
    let max = scale_max(values.iter().copied());
    let slot = plot.height / values.len().max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| Bar {
            x: plot.left,
            y: plot.top + i as f64 * slot + slot * 0.2,
            width: value.max(0.0) / max * plot.width,
            height: slot * 0.6,
        })
        .collect()
}

fn line_points(values: &[f64], plot: Plot) -> Vec<(f64, f64)> {
    let max = scale_max(values.iter().copied());
    let step = if values.len() > 1 {
        plot.width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let offset = if values.len() == 1 { plot.width / 2.0 } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            (
                plot.left + offset + i as f64 * step,
                plot.bottom() - value.max(0.0) / max * plot.height,
            )
        })
        .collect()
}

/// Sectors clockwise from twelve o'clock, sized by value.
fn pie_arcs(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<Arc> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * TAU;
            let end = start + sweep;
            let mid = start + sweep / 2.0;

            let path = if sweep >= TAU - 1e-9 {
                format!(
                    "M {l} {cy} A {radius} {radius} 0 1 1 {r} {cy} A {radius} {radius} 0 1 1 {l} {cy} Z",
                    l = cx - radius,
                    r = cx + radius,
                )
            } else {
                let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
                format!(
                    "M {cx} {cy} L {x0:.2} {y0:.2} A {radius} {radius} 0 {large} 1 {x1:.2} {y1:.2} Z",
                    x0 = cx + radius * start.cos(),
                    y0 = cy + radius * start.sin(),
                    x1 = cx + radius * end.cos(),
                    y1 = cy + radius * end.sin(),
                )
            };

            start = end;
            Arc {
                path,
                label_x: cx + radius * 1.3 * mid.cos(),
                label_y: cy + radius * 1.3 * mid.sin(),
            }
        })
        .collect()
}

#[component]
pub fn ChartCard(title: String, #[props(default)] full_width: bool, children: Element) -> Element {
    rsx! {
        div { class: if full_width { "chart-container full-width" } else { "chart-container" },
            h2 { "{title}" }
            {children}
        }
    }
}

#[component]
fn Legend(name: String, color: String) -> Element {
    rsx! {
        div { class: "chart-legend",
            span { class: "chart-legend-swatch", style: "background: {color}" }
            span { "{name}" }
        }
    }
}

#[component]
fn Grid(plot: Plot, max: f64) -> Element {
    let right = plot.right();
    let tick_x = plot.left - 6.0;

    rsx! {
        g { class: "chart-grid",
            for i in 0..=GRID_LINES {
                {
                    let y = plot.top + plot.height * i as f64 / GRID_LINES as f64;
                    let tick_y = y + 4.0;
                    let tick = max * (GRID_LINES - i) as f64 / GRID_LINES as f64;
                    rsx! {
                        g { key: "{i}",
                            line {
                                x1: "{plot.left}",
                                x2: "{right}",
                                y1: "{y}",
                                y2: "{y}",
                                stroke: "#ddd",
                                stroke_dasharray: "3 3",
                            }
                            text {
                                x: "{tick_x}",
                                y: "{tick_y}",
                                text_anchor: "end",
                                font_size: "11",
                                "{tick:.0}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BarChart(
    data: Vec<Datum>,
    series: String,
    color: String,
    #[props(default)] horizontal: bool,
    #[props(default)] format: ValueFormat,
) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let plot = Plot::with_left_margin(if horizontal { 160.0 } else { 56.0 });
    let bars = if horizontal {
        horizontal_bars(&values, plot)
    } else {
        vertical_bars(&values, plot)
    };
    let max = scale_max(values.iter().copied());

    rsx! {
        div { class: "chart",
            svg { class: "chart-svg", view_box: "0 0 {WIDTH} {HEIGHT}",
                if !horizontal {
                    Grid { plot, max }
                }
                for (i, (datum, bar)) in data.iter().zip(bars).enumerate() {
                    {
                        let tooltip = format!("{}: {}", datum.label, format.apply(datum.value));
                        let (label_x, label_y, anchor) = if horizontal {
                            (bar.x - 6.0, bar.y + bar.height / 2.0 + 4.0, "end")
                        } else {
                            (bar.x + bar.width / 2.0, plot.bottom() + 16.0, "middle")
                        };
                        rsx! {
                            g { key: "{i}",
                                rect {
                                    x: "{bar.x}",
                                    y: "{bar.y}",
                                    width: "{bar.width}",
                                    height: "{bar.height}",
                                    fill: "{color}",
                                    title { "{tooltip}" }
                                }
                                text {
                                    x: "{label_x}",
                                    y: "{label_y}",
                                    text_anchor: "{anchor}",
                                    font_size: "11",
                                    "{datum.label}"
                                }
                            }
                        }
                    }
                }
            }
            Legend { name: series.clone(), color: color.clone() }
        }
    }
}

#[component]
pub fn LineChart(data: Vec<Datum>, series: String, color: String) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let plot = Plot::with_left_margin(56.0);
    let points = line_points(&values, plot);
    let max = scale_max(values.iter().copied());
    let label_y = plot.bottom() + 16.0;
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        div { class: "chart",
            svg { class: "chart-svg", view_box: "0 0 {WIDTH} {HEIGHT}",
                Grid { plot, max }
                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2",
                }
                for (i, (datum, (x, y))) in data.iter().zip(points).enumerate() {
                    g { key: "{i}",
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "4",
                            fill: "{color}",
                            title { "{datum.label}: {datum.value}" }
                        }
                        text {
                            x: "{x}",
                            y: "{label_y}",
                            text_anchor: "middle",
                            font_size: "11",
                            "{datum.label}"
                        }
                    }
                }
            }
            Legend { name: series.clone(), color: color.clone() }
        }
    }
}

/// Slices are sized by value and labelled with the caller's text.
#[component]
pub fn PieChart(slices: Vec<Slice>, #[props(default)] format: ValueFormat) -> Element {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let arcs = pie_arcs(&values, WIDTH / 2.0, HEIGHT / 2.0, 80.0);

    if arcs.is_empty() {
        return rsx! {
            div { class: "chart chart-empty", "Sin datos" }
        };
    }

    rsx! {
        div { class: "chart",
            svg { class: "chart-svg", view_box: "0 0 {WIDTH} {HEIGHT}",
                for (i, (slice, arc)) in slices.iter().zip(arcs).enumerate() {
                    {
                        let anchor = if arc.label_x < WIDTH / 2.0 { "end" } else { "start" };
                        let tooltip = format.apply(slice.value);
                        rsx! {
                            g { key: "{i}",
                                path {
                                    d: "{arc.path}",
                                    fill: "{slice.color}",
                                    stroke: "#fff",
                                    title { "{slice.label} ({tooltip})" }
                                }
                                text {
                                    x: "{arc.label_x}",
                                    y: "{arc.label_y}",
                                    text_anchor: "{anchor}",
                                    font_size: "12",
                                    fill: "{slice.color}",
                                    "{slice.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> Plot {
        Plot::with_left_margin(56.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(5), "#82CA9D");
        assert_eq!(palette_color(6), "#0088FE");
    }

    #[test]
    fn tallest_bar_fills_plot() {
        let plot = plot();
        let bars = vertical_bars(&[50.0, 100.0, 0.0], plot);

        assert_eq!(bars.len(), 3);
        assert!(close(bars[1].height, plot.height));
        assert!(close(bars[1].y, plot.top));
        assert!(close(bars[0].height, plot.height / 2.0));
        assert!(close(bars[2].height, 0.0));
        assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    }

    #[test]
    fn all_zero_values_do_not_divide_by_zero() {
        let bars = vertical_bars(&[0.0, 0.0], plot());
        assert!(bars.iter().all(|b| b.height == 0.0 && b.height.is_finite()));

        let points = line_points(&[0.0, 0.0], plot());
        assert!(points.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn horizontal_bars_stack_downwards() {
        let plot = Plot::with_left_margin(160.0);
        let bars = horizontal_bars(&[10.0, 5.0], plot);

        assert!(close(bars[0].width, plot.width));
        assert!(close(bars[1].width, plot.width / 2.0));
        assert!(bars[0].y < bars[1].y);
        assert!(bars.iter().all(|b| close(b.x, plot.left)));
    }

    #[test]
    fn line_spans_plot_width() {
        let plot = plot();
        let points = line_points(&[1.0, 2.0, 4.0], plot);

        assert!(close(points[0].0, plot.left));
        assert!(close(points[2].0, plot.right()));
        assert!(close(points[2].1, plot.top));

        let single = line_points(&[3.0], plot);
        assert!(close(single[0].0, plot.left + plot.width / 2.0));
    }

    #[test]
    fn pie_splits_by_value() {
        let arcs = pie_arcs(&[500.0, 500.0], 100.0, 100.0, 50.0);

        assert_eq!(arcs.len(), 2);
        // First half sits on the right, second on the left.
        assert!(arcs[0].label_x > 100.0);
        assert!(arcs[1].label_x < 100.0);
        assert!(arcs.iter().all(|a| a.path.starts_with("M 100 100")));
    }

    #[test]
    fn single_slice_is_full_circle() {
        let arcs = pie_arcs(&[42.0], 100.0, 100.0, 50.0);

        assert_eq!(arcs.len(), 1);
        assert!(arcs[0].path.starts_with("M 50 100 A"));
    }

    #[test]
    fn empty_pie_has_no_arcs() {
        assert!(pie_arcs(&[], 0.0, 0.0, 10.0).is_empty());
        assert!(pie_arcs(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn value_format() {
        assert_eq!(ValueFormat::Plain.apply(12.0), "12");
        assert_eq!(ValueFormat::Currency.apply(12500.0), "$12,500");
    }
}
