//! Line chart description for a resampled price series.
//!
//! The serialised form follows the plotly figure layout (`data` + `layout`),
//! so an exported chart can be handed to any plotly front end unchanged.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: AxisTitle,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: &'static str,
    pub template: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// The single price trace.
    pub fn trace(&self) -> Option<&Trace> {
        self.data.first()
    }
}

pub fn render(
    period_starts: &[NaiveDate],
    mean_closes: &[f64],
    title: &str,
    interval_label: &str,
) -> ChartSpec {
    ChartSpec {
        data: vec![Trace {
            kind: "scatter",
            mode: "lines+markers",
            name: "Price".to_string(),
            x: period_starts.to_vec(),
            y: mean_closes.to_vec(),
        }],
        layout: Layout {
            title: AxisTitle {
                text: title.to_string(),
            },
            xaxis: Axis {
                title: AxisTitle {
                    text: interval_label.to_string(),
                },
                kind: "date",
            },
            yaxis: Axis {
                title: AxisTitle {
                    text: "Price".to_string(),
                },
                kind: "linear",
            },
            hovermode: "x unified",
            template: "plotly_white",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sets_axes_and_hover() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        ];
        let chart = render(&dates, &[10.0, 20.0], "NIFTY 50", "Year");

        assert_eq!(chart.title(), "NIFTY 50");
        assert_eq!(chart.layout.xaxis.title.text, "Year");
        assert_eq!(chart.layout.yaxis.title.text, "Price");
        assert_eq!(chart.layout.hovermode, "x unified");

        let trace = chart.trace().unwrap();
        assert_eq!(trace.name, "Price");
        assert_eq!(trace.x, dates);
        assert_eq!(trace.y, vec![10.0, 20.0]);
    }

    #[test]
    fn test_render_serializes_as_plotly_figure() {
        let dates = vec![NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()];
        let chart = render(&dates, &[42.5], "Gold", "Month");
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["x"][0], "2023-05-01");
        assert_eq!(json["data"][0]["y"][0], 42.5);
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Month");
        assert_eq!(json["layout"]["hovermode"], "x unified");
    }
}
