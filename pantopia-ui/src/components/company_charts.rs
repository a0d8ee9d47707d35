//! Company Charts
//!
//! Bar chart of companies by industry and pie chart of companies by status,
//! drawn on HTML5 Canvas from the server's chart models.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::{BarChart, ChartsView, Palette, PieChart, PieSlice};

const CANVAS_WIDTH: f64 = 560.0;
const CANVAS_HEIGHT: f64 = 320.0;

/// Industry bar chart and status pie chart side by side
#[component]
pub fn CompanyCharts(#[prop(into)] charts: Signal<ChartsView>) -> impl IntoView {
    // Each chart only redraws when its own model changes
    let bar = create_memo(move |_| charts.with(|c| c.industry.clone()));
    let pie = create_memo(move |_| charts.with(|c| c.status.clone()));
    let palette = create_memo(move |_| charts.with(|c| c.palette.clone()));

    let bar_ref = create_node_ref::<html::Canvas>();
    let pie_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let (bar, palette) = (bar.get(), palette.get());
        if let Some(canvas) = bar_ref.get() {
            draw_bar_chart(&canvas, &bar, &palette);
        }
    });

    create_effect(move |_| {
        let (pie, palette) = (pie.get(), palette.get());
        if let Some(canvas) = pie_ref.get() {
            draw_pie_chart(&canvas, &pie, &palette);
        }
    });

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <ChartCard
                title=Signal::derive(move || bar.with(|b| b.title.clone()))
                subtitle=Signal::derive(move || bar.with(|b| b.subtitle.clone()))
                total=Signal::derive(move || bar.with(|b| b.total))
            >
                <canvas
                    node_ref=bar_ref
                    width=CANVAS_WIDTH
                    height=CANVAS_HEIGHT
                    class="w-full rounded-lg"
                />
            </ChartCard>

            <ChartCard
                title=Signal::derive(move || pie.with(|p| p.title.clone()))
                subtitle=Signal::derive(move || pie.with(|p| p.subtitle.clone()))
                total=Signal::derive(move || pie.with(|p| p.total))
            >
                <canvas
                    node_ref=pie_ref
                    width=CANVAS_WIDTH
                    height=CANVAS_HEIGHT
                    class="w-full rounded-lg"
                />
                <PieLegend slices=Signal::derive(move || pie.with(|p| p.slices.clone())) />
            </ChartCard>
        </div>
    }
}

/// Card frame with title, subtitle and total
#[component]
fn ChartCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(into)] total: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="chart-card rounded-xl p-6">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h2 class="text-lg font-semibold">{title}</h2>
                    <p class="text-sm opacity-70">{subtitle}</p>
                </div>
                <span class="text-sm font-medium">{move || format!("Total: {}", total.get())}</span>
            </div>
            {children()}
        </section>
    }
}

#[component]
fn PieLegend(#[prop(into)] slices: Signal<Vec<PieSlice>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                slices.get()
                    .into_iter()
                    .map(|slice| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", slice.color)
                            />
                            <span class="text-sm">{slice.label_text}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, width: f64, height: f64, palette: &Palette) {
    ctx.set_fill_style(&palette.secondary_text.as_str().into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("No data", width / 2.0, height / 2.0);
}

/// Draw the industry bar chart
fn draw_bar_chart(canvas: &HtmlCanvasElement, chart: &BarChart, palette: &Palette) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 48.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&palette.chart_background.as_str().into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if chart.no_data || chart.points.is_empty() {
        draw_no_data(&ctx, width, height, palette);
        return;
    }

    let values: Vec<u64> = chart.points.iter().map(|p| p.value).collect();
    let axis_max = axis_max(&values);

    // Horizontal grid lines with integer tick labels
    ctx.set_stroke_style(&palette.axis.as_str().into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    let ticks = tick_count(axis_max);
    for i in 0..=ticks {
        let y = margin_top + chart_height - (i as f64 / ticks as f64) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&palette.secondary_text.as_str().into());
        let value = axis_max * i as u64 / ticks as u64;
        let _ = ctx.fill_text(&value.to_string(), margin_left - 6.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / chart.points.len() as f64;
    let bar_width = (slot * 0.6).min(64.0);
    ctx.set_text_align("center");

    for (i, (point, bar_height)) in chart
        .points
        .iter()
        .zip(bar_heights(&values, axis_max, chart_height))
        .enumerate()
    {
        let x = margin_left + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&chart.bar_color.as_str().into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&palette.text.as_str().into());
        let _ = ctx.fill_text(&point.value.to_string(), x + bar_width / 2.0, y - 4.0);

        let label = if point.label.is_empty() { "(none)" } else { point.label.as_str() };
        ctx.set_fill_style(&palette.secondary_text.as_str().into());
        let _ = ctx.fill_text(
            &truncate_label(label, 12),
            x + bar_width / 2.0,
            margin_top + chart_height + 20.0,
        );
    }
}

/// Draw the status pie chart
fn draw_pie_chart(canvas: &HtmlCanvasElement, chart: &PieChart, palette: &Palette) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&palette.chart_background.as_str().into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if chart.no_data || chart.slices.is_empty() {
        draw_no_data(&ctx, width, height, palette);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 16.0;

    let values: Vec<u64> = chart.slices.iter().map(|s| s.value).collect();

    for (slice, (start, end)) in chart.slices.iter().zip(slice_angles(&values)) {
        ctx.set_fill_style(&slice.color.as_str().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();
    }

    // Percent labels at the middle of each slice
    ctx.set_fill_style(&chart.label_color.as_str().into());
    ctx.set_font("bold 13px sans-serif");
    ctx.set_text_align("center");
    for (slice, (start, end)) in chart.slices.iter().zip(slice_angles(&values)) {
        if slice.percent < 5 {
            continue;
        }
        let mid = (start + end) / 2.0;
        let x = cx + mid.cos() * radius * 0.62;
        let y = cy + mid.sin() * radius * 0.62;
        let _ = ctx.fill_text(&format!("{}%", slice.percent), x, y + 4.0);
    }
}

/// Top of the value axis: the largest value, at least 1
fn axis_max(values: &[u64]) -> u64 {
    values.iter().copied().max().unwrap_or(0).max(1)
}

/// Number of grid steps, at most one per unit
fn tick_count(axis_max: u64) -> u32 {
    axis_max.min(5) as u32
}

/// Bar heights in pixels for an axis running from 0 to `axis_max`
fn bar_heights(values: &[u64], axis_max: u64, chart_height: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| v as f64 / axis_max.max(1) as f64 * chart_height)
        .collect()
}

/// Start/end angles of each slice, clockwise from twelve o'clock
fn slice_angles(values: &[u64]) -> Vec<(f64, f64)> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|&v| {
            let end = start + v as f64 / total as f64 * 2.0 * PI;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(&[2, 7, 3]), 7);
        assert_eq!(axis_max(&[0, 0]), 1);
        assert_eq!(axis_max(&[]), 1);
    }

    #[test]
    fn test_tick_count_keeps_integer_ticks() {
        assert_eq!(tick_count(2), 2);
        assert_eq!(tick_count(40), 5);
    }

    #[test]
    fn test_bar_heights_scale_to_axis() {
        let heights = bar_heights(&[2, 1], 2, 200.0);
        assert_eq!(heights, vec![200.0, 100.0]);
    }

    #[test]
    fn test_slice_angles_cover_circle() {
        let angles = slice_angles(&[2, 1, 1]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 + PI / 2.0).abs() < 1e-9);
        assert!((angles[0].1 - 0.0).abs() < 1e-9);
        let sweep = angles[2].1 - angles[0].0;
        assert!((sweep - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_slice_angles_empty_total() {
        assert!(slice_angles(&[0, 0]).is_empty());
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Tech", 12), "Tech");
        assert_eq!(truncate_label("Telecommunications", 8), "Telecom…");
    }
}
