//! The page that hosts the chart: status line, container and tooltip.

use anyhow::{bail, Result};

use super::chart::Drawing;
use super::svg::{escape, Element};
use crate::format::js_number;
use crate::interact::{CellEvent, Tooltip, OUTLINE_STROKE, OUTLINE_WIDTH, TOOLTIP_ID, TOOLTIP_OFFSET};
use crate::logging::{log, obj, v_str, Domain, Level};

pub const CONTAINER_ID: &str = "container";
pub const DESCRIPTION_ID: &str = "description";

/// Text of the `#description` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn append_base_temperature(&mut self, base_temperature: f64) {
        self.append(&format!("base temperature  {} ℃", js_number(base_temperature)));
    }

    pub fn to_element(&self) -> Element {
        Element::new("p").attr("id", DESCRIPTION_ID).text(&self.text)
    }
}

/// The `#container` element. Holds at most one drawing, mounted once.
#[derive(Debug, Clone, Default)]
pub struct Container {
    drawing: Option<Drawing>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, drawing: Drawing) -> Result<()> {
        if self.drawing.is_some() {
            bail!("#{} already holds a drawing", CONTAINER_ID);
        }
        self.drawing = Some(drawing);
        log(Level::Debug, Domain::Render, "container.mounted", obj(&[("id", v_str(CONTAINER_ID))]));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.drawing.is_none()
    }

    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    pub fn drawing_mut(&mut self) -> Option<&mut Drawing> {
        self.drawing.as_mut()
    }

    pub fn to_element(&self) -> Element {
        let el = Element::new("div").attr("id", CONTAINER_ID);
        match &self.drawing {
            Some(drawing) => el.child(drawing.to_element()),
            None => el,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub description: StatusLine,
    pub container: Container,
    pub tooltip: Tooltip,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: StatusLine::default(),
            container: Container::new(),
            tooltip: Tooltip::new(),
        }
    }

    /// Browser glue: forwards the four pointer events on every cell to the
    /// same tooltip and outline changes the cell handlers make.
    fn script() -> String {
        format!(
            r##"(function () {{
    const tooltip = document.getElementById("{tooltip}");
    const offset = {offset};
    document.querySelectorAll("#{container} .cell").forEach(function (cell) {{
        cell.addEventListener("{enter}", function (e) {{
            tooltip.replaceChildren();
            cell.dataset.tooltip.split("\n").forEach(function (line, i) {{
                if (i > 0) tooltip.appendChild(document.createElement("br"));
                tooltip.appendChild(document.createTextNode(line));
            }});
            tooltip.style.opacity = 1;
            tooltip.style.left = (e.pageX + offset) + "px";
            tooltip.style.top = (e.pageY + offset) + "px";
            tooltip.setAttribute("data-year", cell.dataset.year);
        }});
        cell.addEventListener("{leave}", function () {{
            tooltip.style.opacity = 0;
        }});
        cell.addEventListener("{over}", function () {{
            cell.style.stroke = "{stroke}";
            cell.style.strokeWidth = "{width}";
        }});
        cell.addEventListener("{out}", function () {{
            cell.style.stroke = "none";
        }});
    }});
}})();"##,
            tooltip = TOOLTIP_ID,
            offset = js_number(TOOLTIP_OFFSET),
            container = CONTAINER_ID,
            enter = CellEvent::MouseEnter.as_str(),
            leave = CellEvent::MouseLeave.as_str(),
            over = CellEvent::MouseOver.as_str(),
            out = CellEvent::MouseOut.as_str(),
            stroke = OUTLINE_STROKE,
            width = OUTLINE_WIDTH,
        )
    }

    pub fn to_html(&self) -> String {
        let body = Element::new("body")
            .child(Element::new("h1").attr("id", "title").text(&self.title))
            .child(self.description.to_element())
            .child(self.container.to_element())
            .child(self.tooltip.to_element());
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n{}\n<script>\n{}\n</script>\n</html>\n",
            escape(&self.title),
            body.to_markup(),
            Self::script()
        )
    }
}
