use plotly::{color::Rgb, common::Title, Layout, Plot, Scatter};

use crate::dataset::Dataset;

pub const TITLE: &str = "Share Price over Time";
pub const PREDICTED_NAME: &str = "Predicted price";
pub const CLOSE_NAME: &str = "Close price";
pub const PLOT_BACKGROUND: (u8, u8, u8) = (230, 230, 230);
pub const SHOW_LEGEND: bool = true;

/// One line on the chart.  The x values are the dates as they appear in
/// the file, used as category labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: &str, x: Vec<String>, y: Vec<Option<f64>>) -> Series {
        Series {
            name: name.to_string(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub plot_background: (u8, u8, u8),
    pub show_legend: bool,
    pub series: Vec<Series>,
}

impl Figure {
    /// Predicted price first, then the close price.
    pub fn from_dataset(data: &Dataset) -> Figure {
        let predicted = Series::new(PREDICTED_NAME, data.dates.clone(), data.predictions.clone());
        let close = Series::new(CLOSE_NAME, data.dates.clone(), data.close.clone());
        Figure {
            title: TITLE.to_string(),
            plot_background: PLOT_BACKGROUND,
            show_legend: SHOW_LEGEND,
            series: vec![predicted, close],
        }
    }

    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        for series in &self.series {
            let trace = Scatter::new(series.x.clone(), series.y.clone()).name(&series.name);
            plot.add_trace(trace);
        }
        let (r, g, b) = self.plot_background;
        plot.set_layout(
            Layout::new()
                .title(Title::with_text(&self.title))
                .plot_background_color(Rgb::new(r, g, b))
                .show_legend(self.show_legend),
        );
        plot
    }
}
