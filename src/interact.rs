//! Pointer handlers for chart cells and the tooltip they drive.
//!
//! Each rendered `Cell` carries a `CellHandlers` table of plain functions.
//! The host dispatches an event by calling `Cell::dispatch`, which looks up
//! the matching handler; handlers only toggle state on the cell element or
//! the tooltip and are safe to call repeatedly.

use std::fmt;

use crate::format::{month_name, to_fixed};
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::render::chart::{Cell, CellDatum};
use crate::render::svg::Element;

pub const TOOLTIP_ID: &str = "tooltip";
/// Tooltip distance from the pointer, both axes, in page pixels.
pub const TOOLTIP_OFFSET: f64 = 20.0;
pub const OUTLINE_STROKE: &str = "#333";
pub const OUTLINE_WIDTH: &str = "2px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    MouseEnter,
    MouseLeave,
    MouseOver,
    MouseOut,
}

impl CellEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellEvent::MouseEnter => "mouseenter",
            CellEvent::MouseLeave => "mouseleave",
            CellEvent::MouseOver => "mouseover",
            CellEvent::MouseOut => "mouseout",
        }
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub page_x: f64,
    pub page_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    opacity: f64,
    left: f64,
    top: f64,
    lines: Vec<String>,
    data_year: Option<i32>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            left: 0.0,
            top: 0.0,
            lines: Vec::new(),
            data_year: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("div")
            .attr("id", TOOLTIP_ID)
            .style("position", "absolute")
            .style("background-color", "rgba(34, 34, 56, 0.9)")
            .style("color", "white")
            .style("padding", "1rem")
            .style("border-radius", "10px")
            .style("pointer-events", "none")
            .style("opacity", self.opacity)
            .style("left", format!("{}px", self.left))
            .style("top", format!("{}px", self.top));
        if let Some(year) = self.data_year {
            el.set_attr("data-year", year);
        }
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                el.push(Element::new("br"));
            }
            el.push_text(line);
        }
        el
    }
}

pub type CellHandler = fn(&mut Cell, &mut Tooltip, Pointer);

#[derive(Clone, Copy)]
pub struct CellHandlers {
    pub mouse_enter: CellHandler,
    pub mouse_leave: CellHandler,
    pub mouse_over: CellHandler,
    pub mouse_out: CellHandler,
}

impl Default for CellHandlers {
    fn default() -> Self {
        Self {
            mouse_enter: show_tooltip,
            mouse_leave: hide_tooltip,
            mouse_over: outline_cell,
            mouse_out: clear_outline,
        }
    }
}

impl fmt::Debug for CellHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellHandlers").finish_non_exhaustive()
    }
}

impl CellHandlers {
    pub fn handler(&self, event: CellEvent) -> CellHandler {
        match event {
            CellEvent::MouseEnter => self.mouse_enter,
            CellEvent::MouseLeave => self.mouse_leave,
            CellEvent::MouseOver => self.mouse_over,
            CellEvent::MouseOut => self.mouse_out,
        }
    }
}

impl Cell {
    pub fn dispatch(&mut self, event: CellEvent, pointer: Pointer, tooltip: &mut Tooltip) {
        log(
            Level::Trace,
            Domain::Interact,
            "cell.event",
            obj(&[
                ("event", v_str(event.as_str())),
                ("year", v_num(self.datum.year as f64)),
                ("month", v_num(self.datum.month as f64)),
            ]),
        );
        let handler = self.handlers.handler(event);
        handler(self, tooltip, pointer);
    }
}

/// Month and year, absolute temperature, variance.
pub fn tooltip_lines(datum: &CellDatum) -> Vec<String> {
    let month = month_name(datum.month).unwrap_or("");
    vec![
        format!("{} - {}", month, datum.year),
        format!("{} ℃", to_fixed(datum.base_temperature + datum.variance, 2)),
        format!("{} ℃", to_fixed(datum.variance, 2)),
    ]
}

pub fn show_tooltip(cell: &mut Cell, tooltip: &mut Tooltip, pointer: Pointer) {
    tooltip.opacity = 1.0;
    tooltip.lines = tooltip_lines(&cell.datum);
    tooltip.left = pointer.page_x + TOOLTIP_OFFSET;
    tooltip.top = pointer.page_y + TOOLTIP_OFFSET;
    tooltip.data_year = Some(cell.datum.year);
}

/// Hides without clearing the content.
pub fn hide_tooltip(_cell: &mut Cell, tooltip: &mut Tooltip, _pointer: Pointer) {
    tooltip.opacity = 0.0;
}

pub fn outline_cell(cell: &mut Cell, _tooltip: &mut Tooltip, _pointer: Pointer) {
    cell.element.set_style("stroke", OUTLINE_STROKE);
    cell.element.set_style("stroke-width", OUTLINE_WIDTH);
}

pub fn clear_outline(cell: &mut Cell, _tooltip: &mut Tooltip, _pointer: Pointer) {
    cell.element.set_style("stroke", "none");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(year: i32, month: i32, variance: f64, base: f64) -> Cell {
        Cell::new(
            CellDatum {
                year,
                month,
                variance,
                base_temperature: base,
            },
            Element::new("rect").style("stroke", "none"),
        )
    }

    #[test]
    fn test_tooltip_lines_format() {
        let c = cell(1900, 1, 0.5, 8.0);
        assert_eq!(tooltip_lines(&c.datum), vec!["January - 1900", "8.50 ℃", "0.50 ℃"]);
    }

    #[test]
    fn test_enter_then_leave_keeps_content() {
        let mut c = cell(2000, 6, -1.2, 9.0);
        let mut tip = Tooltip::new();
        c.dispatch(CellEvent::MouseEnter, Pointer { page_x: 100.0, page_y: 50.0 }, &mut tip);
        assert!(tip.is_visible());
        assert_eq!(tip.position(), (120.0, 70.0));
        assert_eq!(tip.data_year(), Some(2000));
        assert_eq!(tip.lines(), &["June - 2000", "7.80 ℃", "-1.20 ℃"]);

        c.dispatch(CellEvent::MouseLeave, Pointer::default(), &mut tip);
        assert!(!tip.is_visible());
        assert_eq!(tip.lines().len(), 3);
        assert_eq!(tip.position(), (120.0, 70.0));
    }

    #[test]
    fn test_outline_toggle_is_idempotent() {
        let mut c = cell(1900, 3, 0.0, 8.0);
        let mut tip = Tooltip::new();
        for _ in 0..2 {
            c.dispatch(CellEvent::MouseOver, Pointer::default(), &mut tip);
            assert_eq!(c.element.get_style("stroke"), Some("#333"));
            assert_eq!(c.element.get_style("stroke-width"), Some("2px"));
        }
        for _ in 0..2 {
            c.dispatch(CellEvent::MouseOut, Pointer::default(), &mut tip);
            assert_eq!(c.element.get_style("stroke"), Some("none"));
        }
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_handlers_are_replaceable() {
        fn pin_tooltip(_: &mut Cell, tooltip: &mut Tooltip, _: Pointer) {
            tooltip.left = 1.0;
            tooltip.top = 1.0;
        }
        let mut c = cell(1900, 1, 0.0, 8.0);
        c.handlers.mouse_enter = pin_tooltip;
        let mut tip = Tooltip::new();
        c.dispatch(CellEvent::MouseEnter, Pointer { page_x: 500.0, page_y: 500.0 }, &mut tip);
        assert_eq!(tip.position(), (1.0, 1.0));
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_tooltip_element() {
        let mut c = cell(1900, 1, 0.5, 8.0);
        let mut tip = Tooltip::new();
        c.dispatch(CellEvent::MouseEnter, Pointer { page_x: 0.0, page_y: 10.0 }, &mut tip);
        let el = tip.to_element();
        assert_eq!(el.get_attr("id"), Some("tooltip"));
        assert_eq!(el.get_attr("data-year"), Some("1900"));
        assert_eq!(el.get_style("opacity"), Some("1"));
        assert_eq!(el.get_style("top"), Some("30px"));
        assert_eq!(el.text_content(), "January - 19008.50 ℃0.50 ℃");
        assert_eq!(el.children().filter(|e| e.tag() == "br").count(), 2);
    }
}
