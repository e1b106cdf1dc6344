/// Fixed logical geometry of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Side of one legend swatch.
    pub legend_swatch: f64,
    /// Legend label axis spans this many swatch widths.
    pub legend_label_swatches: f64,
    /// Horizontal shift of the legend label axis inside the legend group.
    pub legend_label_offset: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1300.0,
            height: 500.0,
            margin: Margin {
                top: 40.0,
                bottom: 80.0,
                left: 80.0,
                right: 40.0,
            },
            legend_swatch: 20.0,
            legend_label_swatches: 13.0,
            legend_label_offset: -250.0,
        }
    }
}

impl Layout {
    pub fn legend_label_span(&self) -> f64 {
        self.legend_swatch * self.legend_label_swatches
    }

    pub fn legend_origin(&self) -> (f64, f64) {
        (
            self.margin.left * 4.0,
            self.height - self.margin.bottom / 2.0 + 10.0,
        )
    }

    pub fn x_axis_offset(&self) -> f64 {
        self.height - self.margin.bottom
    }
}
