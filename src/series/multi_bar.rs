use smallvec::SmallVec;
use tracing::warn;

use crate::api::GraphView;
use crate::axis::AxisOrientation;
use crate::core::{GraphRect, ScreenRect};
use crate::error::{GraphError, GraphResult};
use crate::render::{Attribute, Canvas, CellGlyph};

use super::{Bar, BarSeries, Series};

/// Clustered bars: N bars per category drawn side by side.
///
/// Sub-series `i` is shifted by `i * spacing` along the category axis and
/// only the first sub-series labels the category. Callers must keep
/// `spacing < bar_every / N`, otherwise neighbouring clusters overlap; this
/// is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBarSeries {
    sub_series: SmallVec<[BarSeries; 4]>,
    spacing: f64,
}

impl MultiBarSeries {
    /// `colors`, when given, must hold one color per bar in a category.
    pub fn new(
        bars_per_category: usize,
        bar_every: f64,
        spacing: f64,
        colors: Option<&[Attribute]>,
    ) -> GraphResult<Self> {
        let color_count = colors.map_or(bars_per_category, <[Attribute]>::len);
        if color_count != bars_per_category {
            warn!(
                expected = bars_per_category,
                actual = color_count,
                "rejecting clustered bar series with mismatched colors"
            );
            return Err(GraphError::ColorCountMismatch {
                expected: bars_per_category,
                actual: color_count,
            });
        }

        let sub_series = (0..bars_per_category)
            .map(|index| BarSeries {
                bar_every,
                offset: index as f64 * spacing,
                draw_labels: index == 0,
                override_color: colors.map(|colors| colors[index]),
                ..BarSeries::default()
            })
            .collect();

        Ok(Self {
            sub_series,
            spacing,
        })
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        for series in &mut self.sub_series {
            series.orientation = orientation;
        }
        self
    }

    /// Adds one category: one bar per sub-series, all sharing `label` and `fill`.
    pub fn add_bars(&mut self, label: &str, fill: char, values: &[f64]) -> GraphResult<()> {
        if values.len() != self.sub_series.len() {
            return Err(GraphError::ValueCountMismatch {
                expected: self.sub_series.len(),
                actual: values.len(),
            });
        }

        for (series, value) in self.sub_series.iter_mut().zip(values.iter().copied()) {
            series.bars.push(Bar::new(label, CellGlyph::new(fill), value));
        }
        Ok(())
    }

    #[must_use]
    pub fn sub_series(&self) -> &[BarSeries] {
        &self.sub_series
    }

    pub fn sub_series_mut(&mut self) -> &mut [BarSeries] {
        &mut self.sub_series
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl Series for MultiBarSeries {
    fn draw_series(
        &self,
        graph: &GraphView,
        canvas: &mut dyn Canvas,
        draw_bounds: ScreenRect,
        graph_bounds: GraphRect,
    ) {
        for series in &self.sub_series {
            series.draw_series(graph, canvas, draw_bounds, graph_bounds);
        }
    }
}
