// services/admin-dash/src/components/charts.rs
//
// LocalDeals Admin - SVG Trend Chart
// Line + gradient area rendered as raw SVG paths; the dataset is fabricated
// once per render, so the paths are computed once as well.
//

use leptos::*;

#[component]
pub fn TrendLine(
    points: Vec<f64>,
    labels: (&'static str, &'static str),
    #[prop(default = "#2E86AB")] stroke: &'static str,
) -> impl IntoView {
    let max_val = points
        .iter()
        .copied()
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let line_path = generate_path(&points, max_val);
    let area_path = generate_area(&points, max_val);
    let gradient_id = format!("trend-{}", stroke.trim_start_matches('#'));
    let gradient_ref = format!("url(#{gradient_id})");

    view! {
        <div class="trend-chart">
            <svg class="chart-svg" viewBox="0 0 400 150" preserveAspectRatio="none">
                // Grid lines
                <line x1="0" y1="37" x2="400" y2="37" class="grid-line" />
                <line x1="0" y1="75" x2="400" y2="75" class="grid-line" />
                <line x1="0" y1="112" x2="400" y2="112" class="grid-line" />

                // Chart path
                <path
                    class="chart-line"
                    d=line_path
                    fill="none"
                    stroke=stroke
                    stroke-width="2"
                />

                // Area fill
                <path class="chart-area" d=area_path fill=gradient_ref opacity="0.3" />

                <defs>
                    <linearGradient id=gradient_id x1="0%" y1="0%" x2="0%" y2="100%">
                        <stop offset="0%" stop-color=stroke stop-opacity="0.8" />
                        <stop offset="100%" stop-color=stroke stop-opacity="0.0" />
                    </linearGradient>
                </defs>
            </svg>

            <div class="chart-labels">
                <span>{labels.0}</span>
                <span>{labels.1}</span>
            </div>
        </div>
    }
}

/// Generate SVG path for line chart
fn generate_path(points: &[f64], max_val: f64) -> String {
    let coords = chart_coords(points, max_val);
    if coords.is_empty() {
        return String::new();
    }
    format!("M {} L {}", coords[0], coords.join(" L "))
}

/// Generate SVG path for area fill
fn generate_area(points: &[f64], max_val: f64) -> String {
    let mut coords = chart_coords(points, max_val);
    if coords.is_empty() {
        return String::new();
    }

    // Close the area path along the baseline
    let width = 400.0;
    let height = 150.0;
    let last_x = ((points.len() - 1) as f64 / points.len().max(1) as f64) * width;
    coords.push(format!("{last_x:.1},{height:.1}"));
    coords.push(format!("0,{height:.1}"));

    format!("M {} L {} Z", coords[0], coords.join(" L "))
}

fn chart_coords(points: &[f64], max_val: f64) -> Vec<String> {
    let width = 400.0;
    let height = 140.0;
    let padding = 5.0;

    points
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = (i as f64 / points.len().max(1) as f64) * width;
            let y = height - padding - ((value / max_val) * (height - padding * 2.0));
            format!("{x:.1},{y:.1}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_yields_empty_paths() {
        assert_eq!(generate_path(&[], 1.0), "");
        assert_eq!(generate_area(&[], 1.0), "");
    }

    #[test]
    fn line_path_starts_with_move_to() {
        let path = generate_path(&[100.0, 200.0, 300.0], 300.0);
        assert!(path.starts_with("M 0.0,"));
        assert!(path.contains(" L "));
    }

    #[test]
    fn area_path_is_closed() {
        let path = generate_area(&[100.0, 200.0], 200.0);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn max_value_touches_the_top_padding() {
        let coords = chart_coords(&[50.0, 100.0], 100.0);
        // y for the max point is height - padding - (height - 2*padding)
        assert!(coords[1].ends_with(",5.0"));
    }
}
