use anyhow::{anyhow, Result};
use sha2::{Digest, Sha256};

use super::axis::Axis;
use super::layout::Layout;
use super::legend::render_legend;
use super::page::Container;
use super::svg::Element;
use crate::data::{Dataset, MonthlyVariance};
use crate::format::{js_number, month_name};
use crate::interact::{tooltip_lines, CellHandlers};
use crate::logging::{log_render_summary, Domain, ProfileScope};
use crate::scale::Scales;

/// Model behind one data rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDatum {
    pub year: i32,
    pub month: i32,
    pub variance: f64,
    pub base_temperature: f64,
}

impl CellDatum {
    pub fn new(obs: &MonthlyVariance, base_temperature: f64) -> Self {
        Self {
            year: obs.year,
            month: obs.month,
            variance: obs.variance,
            base_temperature,
        }
    }

    /// Zero-based month, as exposed on the rectangle.
    pub fn month_index(&self) -> i32 {
        self.month - 1
    }
}

/// A rendered rectangle with its datum and event handlers.
#[derive(Debug, Clone)]
pub struct Cell {
    pub datum: CellDatum,
    pub element: Element,
    pub handlers: CellHandlers,
}

impl Cell {
    pub fn new(datum: CellDatum, element: Element) -> Self {
        Self {
            datum,
            element,
            handlers: CellHandlers::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub x_axis: Element,
    pub y_axis: Element,
    pub cells: Vec<Cell>,
    pub legend: Element,
}

impl Drawing {
    /// Root `svg` element; children in stacking order.
    pub fn to_element(&self) -> Element {
        let mut data = Element::new("g").attr("id", "data-rect");
        for cell in &self.cells {
            data.push(cell.element.clone());
        }
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", js_number(self.width))
            .attr("height", js_number(self.height))
            .child(self.x_axis.clone())
            .child(self.y_axis.clone())
            .child(data)
            .child(self.legend.clone())
    }

    pub fn to_markup(&self) -> String {
        self.to_element().to_markup()
    }

    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.to_markup().as_bytes()))
    }

    /// Topmost cell at a grid coordinate; later-drawn cells cover earlier ones.
    pub fn cell_at_mut(&mut self, year: i32, month: i32) -> Option<&mut Cell> {
        self.cells
            .iter_mut()
            .rev()
            .find(|c| c.datum.year == year && c.datum.month == month)
    }

    pub fn legend_swatches(&self) -> usize {
        self.legend.select_class("legend-rect").len()
    }
}

fn render_cell(obs: &MonthlyVariance, base_temperature: f64, scales: &Scales) -> Result<Cell> {
    let x = scales
        .year
        .map(&obs.year)
        .ok_or_else(|| anyhow!("year {} missing from year scale", obs.year))?;
    let y = scales
        .month
        .map(&obs.month)
        .ok_or_else(|| anyhow!("month {} missing from month scale", obs.month))?;
    let datum = CellDatum::new(obs, base_temperature);
    let element = Element::new("rect")
        .attr("class", "cell")
        .attr("x", js_number(x))
        .attr("y", js_number(y))
        .attr("width", js_number(scales.year.bandwidth()))
        .attr("height", js_number(scales.month.bandwidth()))
        .attr("data-month", datum.month_index())
        .attr("data-year", datum.year)
        .attr("data-temp", js_number(datum.variance))
        .attr("data-tooltip", tooltip_lines(&datum).join("\n"))
        .style("fill", scales.color.map(datum.variance))
        .style("stroke", "none");
    Ok(Cell::new(datum, element))
}

/// Pure rendering: same dataset and layout, same drawing.
pub fn render_chart(dataset: &Dataset, layout: &Layout) -> Result<Drawing> {
    let _profile = ProfileScope::new(Domain::Render, "render_chart");
    let scales = Scales::build(dataset, layout)?;

    let x_axis = Axis::bottom(&scales.year)
        .tick_values(&scales.year_ticks)
        .render_into(
            Element::new("g")
                .attr("transform", format!("translate(0, {})", js_number(layout.x_axis_offset())))
                .attr("id", "x-axis"),
        );

    let y_axis = Axis::left(&scales.month)
        .tick_format(|m| month_name(*m).unwrap_or("").to_string())
        .render_into(
            Element::new("g")
                .attr("transform", format!("translate({}, 0)", js_number(layout.margin.left)))
                .attr("id", "y-axis"),
        );

    let cells = dataset
        .monthly_variance
        .iter()
        .map(|obs| render_cell(obs, dataset.base_temperature, &scales))
        .collect::<Result<Vec<_>>>()?;

    let drawing = Drawing {
        width: layout.width,
        height: layout.height,
        x_axis,
        y_axis,
        cells,
        legend: render_legend(&scales, layout),
    };
    log_render_summary(drawing.cells.len(), drawing.legend_swatches(), &drawing.fingerprint());
    Ok(drawing)
}

/// Render with the default layout and mount into `container`.
pub fn render_into(dataset: &Dataset, container: &mut Container) -> Result<()> {
    let drawing = render_chart(dataset, &Layout::default())?;
    container.mount(drawing)
}
