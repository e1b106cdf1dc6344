use super::axis::Axis;
use super::layout::Layout;
use super::svg::Element;
use crate::format::js_number;
use crate::interact::{OUTLINE_STROKE, OUTLINE_WIDTH};
use crate::scale::Scales;

/// Swatch row plus the absolute-temperature label axis.
///
/// Swatches are laid out left to right and then rotated 180 degrees about
/// the legend origin, so they read right to left and hang above it.
pub fn render_legend(scales: &Scales, layout: &Layout) -> Element {
    let (ox, oy) = layout.legend_origin();
    let mut colors = Element::new("g").attr("id", "color-rect");
    for (i, value) in scales.legend_swatches.iter().enumerate() {
        colors.push(
            Element::new("rect")
                .attr("class", "legend-rect")
                .attr("x", js_number(i as f64 * layout.legend_swatch))
                .attr("y", 0)
                .attr("transform", "rotate(180)")
                .attr("width", js_number(layout.legend_swatch))
                .attr("height", js_number(layout.legend_swatch))
                .style("fill", scales.color.map(*value))
                .style("stroke", OUTLINE_STROKE)
                .style("stroke-width", OUTLINE_WIDTH),
        );
    }

    let labels = Element::new("g")
        .attr("id", "label-rect")
        .attr(
            "transform",
            format!("translate({}, 0)", js_number(layout.legend_label_offset)),
        )
        .child(Axis::bottom(&scales.legend).render_into(Element::new("g")));

    Element::new("g")
        .attr("id", "legend")
        .attr("transform", format!("translate({}, {})", js_number(ox), js_number(oy)))
        .child(colors)
        .child(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, MonthlyVariance};

    #[test]
    fn test_legend_structure() {
        let ds = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                MonthlyVariance { year: 1900, month: 1, variance: -2.0 },
                MonthlyVariance { year: 1900, month: 2, variance: 6.0 },
            ],
        };
        let layout = Layout::default();
        let scales = Scales::build(&ds, &layout).unwrap();
        let legend = render_legend(&scales, &layout);

        assert_eq!(legend.get_attr("transform"), Some("translate(320, 470)"));
        let swatches = legend.select_class("legend-rect");
        assert_eq!(swatches.len(), scales.legend_swatches.len());
        assert_eq!(swatches[1].get_attr("x"), Some("20"));
        assert!(swatches.iter().all(|s| s.get_attr("transform") == Some("rotate(180)")));
        // First swatch samples the domain start, the red end.
        assert_eq!(swatches[0].get_style("fill"), Some(scales.color.map(6.0).to_string().as_str()));

        let labels = legend.find_by_id("label-rect").unwrap();
        assert_eq!(labels.get_attr("transform"), Some("translate(-250, 0)"));
        let texts: Vec<String> = labels.select_class("tick").iter().map(|t| t.text_content()).collect();
        assert_eq!(texts, vec!["6.00", "7.00", "8.00", "9.00", "10.00", "11.00", "12.00", "13.00"]);
    }
}
