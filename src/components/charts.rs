use yew::prelude::*;

use crate::state::theme::{palette, Palette};
use crate::utils::format::thousands;

// All charts share one viewBox width and scale to their container, so
// the geometry below is in viewBox units, not pixels.
const VIEW_W: f64 = 640.0;
const MARGIN_L: f64 = 56.0;
const MARGIN_R: f64 = 16.0;
const MARGIN_T: f64 = 16.0;
const MARGIN_B: f64 = 36.0;
const GRID_STEPS: usize = 5;

/// One bar of a category chart. `detail` is the tooltip body shown
/// after the category name, already formatted by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub name: &'static str,
    pub value: f64,
    pub detail: String,
}

/// One x position of a line series. `note` is appended to the tooltip,
/// typically a growth figure for that step.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub label: &'static str,
    pub value: f64,
    pub note: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub points: Vec<LinePoint>,
    /// Muted color and thinner stroke, for comparison series.
    pub secondary: bool,
    pub dashed: bool,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<BarDatum>,
    /// Top of the y axis in data units; the axis always starts at 0.
    pub max: f64,
    pub axis_label: &'static str,
    pub dark: bool,
    #[prop_or(280)]
    pub height: u32,
}

/// Vertical bar chart with hover tooltips on each bar. Colors come
/// from the theme palette because SVG paint does not see CSS
/// variables.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let colors = palette(props.dark);
    let height = props.height as f64;
    let baseline = height - MARGIN_B;
    let n = props.data.len().max(1);
    let slot = plot_w() / n as f64;
    let bar_w = slot * 0.55;

    html! {
        <svg
            class="chart"
            viewBox={format!("0 0 {VIEW_W} {}", props.height)}
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            { frame(0.0, props.max, height, props.axis_label, colors) }
            { for props.data.iter().enumerate().map(|(i, datum)| {
                let x = MARGIN_L + i as f64 * slot + (slot - bar_w) / 2.0;
                let y = y_at(datum.value, 0.0, props.max, height);
                html! {
                    <rect
                        key={datum.name}
                        class="chart-bar"
                        x={coord(x)}
                        y={coord(y)}
                        width={coord(bar_w)}
                        height={coord(baseline - y)}
                        rx="6"
                        fill={colors.ink}
                    >
                        <title>{ format!("{}: {}", datum.name, datum.detail) }</title>
                    </rect>
                }
            }) }
            { for props.data.iter().enumerate().map(|(i, datum)| html! {
                <text
                    x={coord(MARGIN_L + (i as f64 + 0.5) * slot)}
                    y={coord(height - 12.0)}
                    text-anchor="middle"
                    font-size="11"
                    fill={colors.axis}
                >
                    { datum.name }
                </text>
            }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub series: Vec<LineSeries>,
    pub min: f64,
    pub max: f64,
    pub axis_label: &'static str,
    pub dark: bool,
    #[prop_or(260)]
    pub height: u32,
}

/// One or more line series over a shared categorical x axis, with a
/// dot per point carrying the tooltip. A legend row follows the
/// drawing.
#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let colors = palette(props.dark);
    let height = props.height as f64;
    let labels: Vec<&'static str> = props
        .series
        .first()
        .map(|s| s.points.iter().map(|p| p.label).collect())
        .unwrap_or_default();
    let n = labels.len();

    html! {
        <>
            <svg
                class="chart"
                viewBox={format!("0 0 {VIEW_W} {}", props.height)}
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                { frame(props.min, props.max, height, props.axis_label, colors) }
                { for labels.iter().enumerate().map(|(i, label)| html! {
                    <text
                        x={coord(x_at(i, n))}
                        y={coord(height - 12.0)}
                        text-anchor="middle"
                        font-size="11"
                        fill={colors.axis}
                    >
                        { *label }
                    </text>
                }) }
                { for props.series.iter().map(|series| {
                    let color = if series.secondary { colors.muted } else { colors.ink };
                    let width = if series.secondary { "2" } else { "3" };
                    let radius = if series.secondary { "3" } else { "4" };
                    html! {
                        <g key={series.name}>
                            <polyline
                                points={polyline_points(&series.points, props.min, props.max, height)}
                                fill="none"
                                stroke={color}
                                stroke-width={width}
                                stroke-dasharray={series.dashed.then(|| "5 5")}
                                stroke-linecap="round"
                            />
                            { for series.points.iter().enumerate().map(|(i, point)| html! {
                                <circle
                                    cx={coord(x_at(i, series.points.len()))}
                                    cy={coord(y_at(point.value, props.min, props.max, height))}
                                    r={radius}
                                    fill={color}
                                >
                                    <title>{ point_title(series.name, point) }</title>
                                </circle>
                            }) }
                        </g>
                    }
                }) }
            </svg>
            <div class="chart-legend">
                { for props.series.iter().map(|series| {
                    let color = if series.secondary { colors.muted } else { colors.ink };
                    html! {
                        <span class="chart-legend-item" key={series.name}>
                            <svg width="20" height="6" viewBox="0 0 20 6" aria-hidden="true">
                                <line
                                    x1="0" y1="3" x2="20" y2="3"
                                    stroke={color}
                                    stroke-width="3"
                                    stroke-dasharray={series.dashed.then(|| "4 3")}
                                />
                            </svg>
                            { series.name }
                        </span>
                    }
                }) }
            </div>
        </>
    }
}

/// Gridlines, axis lines, tick labels and the rotated axis caption
/// shared by both chart kinds.
fn frame(min: f64, max: f64, height: f64, axis_label: &'static str, colors: &Palette) -> Html {
    let baseline = height - MARGIN_B;
    html! {
        <>
            { for tick_values(min, max).into_iter().map(|value| {
                let y = y_at(value, min, max, height);
                html! {
                    <g>
                        <line
                            x1={coord(MARGIN_L)} y1={coord(y)}
                            x2={coord(VIEW_W - MARGIN_R)} y2={coord(y)}
                            stroke={colors.grid}
                            stroke-width="1"
                        />
                        <text
                            x={coord(MARGIN_L - 8.0)}
                            y={coord(y + 4.0)}
                            text-anchor="end"
                            font-size="11"
                            fill={colors.axis}
                        >
                            { thousands(value.round() as i64) }
                        </text>
                    </g>
                }
            }) }
            <line
                x1={coord(MARGIN_L)} y1={coord(MARGIN_T)}
                x2={coord(MARGIN_L)} y2={coord(baseline)}
                stroke={colors.grid}
                stroke-width="1"
            />
            <text
                transform={format!("translate(14,{}) rotate(-90)", coord(MARGIN_T + plot_h(height) / 2.0))}
                text-anchor="middle"
                font-size="11"
                fill={colors.muted}
            >
                { axis_label }
            </text>
        </>
    }
}

fn point_title(series: &str, point: &LinePoint) -> String {
    match point.note {
        Some(note) => format!("{series} · {}: {} ({note})", point.label, point.value),
        None => format!("{series} · {}: {}", point.label, point.value),
    }
}

fn plot_w() -> f64 {
    VIEW_W - MARGIN_L - MARGIN_R
}

fn plot_h(height: f64) -> f64 {
    height - MARGIN_T - MARGIN_B
}

/// Center x of category `i` out of `n`.
fn x_at(i: usize, n: usize) -> f64 {
    MARGIN_L + (i as f64 + 0.5) * plot_w() / n.max(1) as f64
}

/// Maps a data value into viewBox y, top of the plot being `max`.
/// A degenerate range collapses to the baseline rather than dividing
/// by zero.
fn y_at(value: f64, min: f64, max: f64, height: f64) -> f64 {
    let baseline = MARGIN_T + plot_h(height);
    if max <= min {
        return baseline;
    }
    let frac = (value - min) / (max - min);
    baseline - frac * plot_h(height)
}

fn tick_values(min: f64, max: f64) -> Vec<f64> {
    (0..=GRID_STEPS)
        .map(|step| min + (max - min) * step as f64 / GRID_STEPS as f64)
        .collect()
}

fn polyline_points(points: &[LinePoint], min: f64, max: f64, height: f64) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{},{}",
                coord(x_at(i, points.len())),
                coord(y_at(p.value, min, max, height))
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn coord(v: f64) -> String {
    format!("{v:.1}")
}
