use std::path::Path;

use log::info;
use plotly::Plot;

use crate::{chart::Figure, dataset::Dataset, error::ChartError};

/// Something that puts a plot in front of the user.
pub trait Viewer {
    fn show(&self, plot: &Plot);
}

/// Opens the plot in the default web browser.
pub struct Browser;

impl Viewer for Browser {
    fn show(&self, plot: &Plot) {
        plot.show();
    }
}

/// Load the file, build the figure and hand it to the viewer.  Nothing is
/// shown if the file can't be loaded.  Returns the figure that was shown.
pub fn render<P: AsRef<Path>, V: Viewer>(path: P, viewer: &V) -> Result<Figure, ChartError> {
    let data = Dataset::read_file(path)?;
    let figure = Figure::from_dataset(&data);
    viewer.show(&figure.to_plot());
    info!("Showing \"{}\" with {} points per series", figure.title, data.len());
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, error::Error};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: RefCell<Vec<String>>,
    }

    impl Viewer for Recorder {
        fn show(&self, plot: &Plot) {
            self.shown.borrow_mut().push(plot.to_json());
        }
    }

    fn asset(name: &str) -> String {
        format!("{}/tests/_assets/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn render_test() -> Result<(), Box<dyn Error>> {
        let viewer = Recorder::default();
        let fig = render(asset("predictions.csv"), &viewer)?;
        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].y, vec![Some(10.1), Some(10.5), Some(10.9)]);
        assert_eq!(fig.series[1].y, vec![Some(10.0), Some(10.4), Some(10.8)]);
        assert_eq!(viewer.shown.borrow().len(), 1);
        Ok(())
    }

    #[test]
    fn render_twice_same_data() -> Result<(), Box<dyn Error>> {
        let viewer = Recorder::default();
        let fig1 = render(asset("predictions.csv"), &viewer)?;
        let fig2 = render(asset("predictions.csv"), &viewer)?;
        assert_eq!(fig1, fig2);
        let shown = viewer.shown.borrow();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0], shown[1]);
        Ok(())
    }

    #[test]
    fn schema_error_shows_nothing() {
        let viewer = Recorder::default();
        let res = render(asset("no_predictions.csv"), &viewer);
        assert!(matches!(res, Err(ChartError::Schema { .. })));
        assert!(viewer.shown.borrow().is_empty());
    }

    #[test]
    fn missing_file_shows_nothing() {
        let viewer = Recorder::default();
        let res = render(asset("does_not_exist.csv"), &viewer);
        assert!(matches!(res, Err(ChartError::DataLoad { .. })));
        assert!(viewer.shown.borrow().is_empty());
    }
}
