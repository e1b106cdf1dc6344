//! Axis markup for band scales.
//!
//! Output mirrors what the browser charting stack draws on a 1x display: a
//! `path.domain` along the range and one `g.tick` per tick value, shifted by
//! half a pixel so one-pixel strokes land on pixel centers.

use std::fmt::Display;
use std::hash::Hash;

use super::svg::Element;
use crate::format::js_number;
use crate::scale::BandScale;

const CRISP_OFFSET: f64 = 0.5;
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

pub struct Axis<'a, K: Eq + Hash + Clone + Display> {
    orient: Orient,
    scale: &'a BandScale<K>,
    tick_values: Option<Vec<K>>,
    tick_format: Option<Box<dyn Fn(&K) -> String + 'a>>,
}

impl<'a, K: Eq + Hash + Clone + Display> Axis<'a, K> {
    pub fn bottom(scale: &'a BandScale<K>) -> Self {
        Self::new(Orient::Bottom, scale)
    }

    pub fn left(scale: &'a BandScale<K>) -> Self {
        Self::new(Orient::Left, scale)
    }

    fn new(orient: Orient, scale: &'a BandScale<K>) -> Self {
        Self {
            orient,
            scale,
            tick_values: None,
            tick_format: None,
        }
    }

    pub fn tick_values(mut self, values: &[K]) -> Self {
        self.tick_values = Some(values.to_vec());
        self
    }

    pub fn tick_format(mut self, format: impl Fn(&K) -> String + 'a) -> Self {
        self.tick_format = Some(Box::new(format));
        self
    }

    /// Tick labels in drawing order.
    pub fn labels(&self) -> Vec<String> {
        self.values().iter().map(|v| self.format(v)).collect()
    }

    fn values(&self) -> Vec<K> {
        self.tick_values
            .clone()
            .unwrap_or_else(|| self.scale.domain().to_vec())
    }

    fn format(&self, value: &K) -> String {
        match &self.tick_format {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }

    fn position(&self, value: &K) -> Option<f64> {
        let center = (self.scale.bandwidth() - CRISP_OFFSET * 2.0).max(0.0) / 2.0;
        self.scale.map(value).map(|start| start + center + CRISP_OFFSET)
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.scale.range();
        let r0 = js_number(r0 + CRISP_OFFSET);
        let r1 = js_number(r1 + CRISP_OFFSET);
        let outer = js_number(TICK_SIZE);
        let neg_outer = js_number(-TICK_SIZE);
        let offset = js_number(CRISP_OFFSET);
        match self.orient {
            Orient::Bottom => format!("M{},{}V{}H{}V{}", r0, outer, offset, r1, outer),
            Orient::Left => format!("M{},{}H{}V{}H{}", neg_outer, r0, offset, r1, neg_outer),
        }
    }

    fn tick(&self, value: &K, position: f64) -> Element {
        let spacing = js_number(TICK_SIZE + TICK_PADDING);
        let (transform, line, text) = match self.orient {
            Orient::Bottom => (
                format!("translate({},0)", js_number(position)),
                Element::new("line")
                    .attr("stroke", "currentColor")
                    .attr("y2", js_number(TICK_SIZE)),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("y", spacing)
                    .attr("dy", "0.71em"),
            ),
            Orient::Left => (
                format!("translate(0,{})", js_number(position)),
                Element::new("line")
                    .attr("stroke", "currentColor")
                    .attr("x2", js_number(-TICK_SIZE)),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("x", format!("-{}", spacing))
                    .attr("dy", "0.32em"),
            ),
        };
        Element::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", transform)
            .child(line)
            .child(text.text(&self.format(value)))
    }

    /// Draw into `group`, the way a selection `.call(axis)` would.
    pub fn render_into(&self, group: Element) -> Element {
        let anchor = match self.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let mut group = group
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            );
        for value in self.values() {
            if let Some(position) = self.position(&value) {
                group.push(self.tick(&value, position));
            }
        }
        group
    }
}
