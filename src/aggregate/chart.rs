//! Chart models
//!
//! Chart-ready views of a `Distribution`: a bar chart over industries and a
//! pie chart over statuses, with the titles, totals and colors the
//! dashboard widgets draw. Widgets only render these; they never count.

use serde::{Deserialize, Serialize};

use super::{Distribution, Series};
use crate::theme::{Palette, Theme};

/// Slice colors, assigned by slice index and repeated when exhausted
pub const PIE_COLORS: [&str; 5] = ["#EF436B", "#52489C", "#F08605", "#BCE7FD", "#C4FFB2"];

/// The `{label, value}` entry chart widgets consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Industry distribution as a bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub total: usize,
    pub points: Vec<ChartPoint>,
    pub bar_color: String,
    pub no_data: bool,
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    /// Share of the total in whole percent
    pub percent: u32,
    /// Text drawn inside the slice, e.g. `Active: 67%`
    pub label_text: String,
    pub color: String,
}

/// Status distribution as a pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub subtitle: String,
    pub total: usize,
    pub slices: Vec<PieSlice>,
    pub label_color: String,
    pub no_data: bool,
}

/// Everything the chart row of the dashboard needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsView {
    pub theme: Theme,
    pub total: usize,
    pub no_data: bool,
    pub industry: BarChart,
    pub status: PieChart,
    pub palette: Palette,
}

impl BarChart {
    pub fn industry(distribution: &Distribution, palette: &Palette) -> Self {
        Self {
            title: "Industry Distribution".to_string(),
            subtitle: "Total companies by industry".to_string(),
            total: distribution.total,
            points: distribution.industry.chart_points(),
            bar_color: palette.bar.to_string(),
            no_data: distribution.industry.is_empty(),
        }
    }
}

impl PieChart {
    pub fn status(distribution: &Distribution, palette: &Palette) -> Self {
        Self {
            title: "Status Distribution".to_string(),
            subtitle: "Total companies by status".to_string(),
            total: distribution.total,
            slices: pie_slices(&distribution.status),
            label_color: palette.pie_label.to_string(),
            no_data: distribution.status.is_empty(),
        }
    }
}

impl ChartsView {
    pub fn build(distribution: &Distribution, theme: Theme) -> Self {
        let palette = theme.palette();
        Self {
            theme,
            total: distribution.total,
            no_data: distribution.is_empty(),
            industry: BarChart::industry(distribution, palette),
            status: PieChart::status(distribution, palette),
            palette: palette.clone(),
        }
    }
}

/// Build pie slices for a series, coloring by position
pub fn pie_slices(series: &Series) -> Vec<PieSlice> {
    let total = series.total();
    series
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let percent = percent_of(entry.count, total);
            PieSlice {
                label: entry.key.clone(),
                value: entry.count as u64,
                percent,
                label_text: format!("{}: {}%", entry.key, percent),
                color: PIE_COLORS[idx % PIE_COLORS.len()].to_string(),
            }
        })
        .collect()
}

/// Whole-percent share, rounding halves up
fn percent_of(value: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::Company;

    fn distribution(pairs: &[(&str, &str)]) -> Distribution {
        let records: Vec<Company> = pairs
            .iter()
            .map(|(industry, status)| Company::new("Test Co", *industry, *status))
            .collect();
        Distribution::from_records(&records)
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(1, 8), 13); // 12.5 rounds up
        assert_eq!(percent_of(0, 0), 0);
    }

    #[test]
    fn test_pie_slices_labels_and_colors() {
        let dist = distribution(&[
            ("Tech", "Active"),
            ("Tech", "Lead"),
            ("Finance", "Active"),
        ]);
        let slices = pie_slices(&dist.status);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label_text, "Active: 67%");
        assert_eq!(slices[0].color, PIE_COLORS[0]);
        assert_eq!(slices[1].label_text, "Lead: 33%");
        assert_eq!(slices[1].color, PIE_COLORS[1]);
    }

    #[test]
    fn test_pie_colors_cycle() {
        let statuses = ["A", "B", "C", "D", "E", "F", "G"];
        let pairs: Vec<(&str, &str)> = statuses.iter().map(|s| ("Tech", *s)).collect();
        let slices = pie_slices(&distribution(&pairs).status);

        assert_eq!(slices[5].color, PIE_COLORS[0]);
        assert_eq!(slices[6].color, PIE_COLORS[1]);
    }

    #[test]
    fn test_charts_view_uses_theme_palette() {
        let dist = distribution(&[("Tech", "Active")]);

        let dark = ChartsView::build(&dist, Theme::Dark);
        assert_eq!(dark.industry.bar_color, "#1a91ff");
        assert_eq!(dark.status.label_color, "#ffffff");
        assert_eq!(dark.industry.title, "Industry Distribution");
        assert_eq!(dark.total, 1);
        assert!(!dark.no_data);

        let light = ChartsView::build(&dist, Theme::Light);
        assert_eq!(light.industry.bar_color, "#3b82f6");
    }

    #[test]
    fn test_empty_distribution_is_no_data() {
        let view = ChartsView::build(&Distribution::default(), Theme::Light);
        assert!(view.no_data);
        assert!(view.industry.no_data);
        assert!(view.status.no_data);
        assert!(view.industry.points.is_empty());
        assert!(view.status.slices.is_empty());
        assert_eq!(view.total, 0);
    }
}
