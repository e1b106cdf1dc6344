//! Rendering properties checked against the emitted markup.
//!
//! Everything here goes through the public surface: build a dataset,
//! render, then inspect the element tree the page would contain.

use heatcal::data::{Dataset, MonthlyVariance};
use heatcal::format::MONTH_NAMES;
use heatcal::interact::{CellEvent, Pointer, Tooltip};
use heatcal::render::{render_chart, render_into, Container, Layout};

fn obs(year: i32, month: i32, variance: f64) -> MonthlyVariance {
    MonthlyVariance { year, month, variance }
}

/// Three decades of synthetic data, deliberately not sorted by year.
fn sample_dataset() -> Dataset {
    let mut rows = Vec::new();
    for year in (1895..=1925).rev() {
        for month in 1..=12 {
            let variance = ((year - 1895) as f64 * 0.07) - (month as f64 * 0.13) + 0.25;
            rows.push(obs(year, month, (variance * 1000.0).round() / 1000.0));
        }
    }
    Dataset {
        base_temperature: 8.66,
        monthly_variance: rows,
    }
}

// ---------------------------------------------------------------------------
// One rectangle per observation, attributes echo the datum
// ---------------------------------------------------------------------------
#[test]
fn cell_count_and_attributes_echo_data() {
    let ds = sample_dataset();
    let root = render_chart(&ds, &Layout::default()).unwrap().to_element();
    let cells = root.select_class("cell");
    assert_eq!(cells.len(), ds.monthly_variance.len());

    for (rect, d) in cells.iter().zip(&ds.monthly_variance) {
        let month_index: i32 = rect.get_attr("data-month").unwrap().parse().unwrap();
        assert_eq!(month_index, d.month - 1);
        assert!((0..=11).contains(&month_index));
        assert_eq!(rect.get_attr("data-year"), Some(d.year.to_string().as_str()));
        let temp: f64 = rect.get_attr("data-temp").unwrap().parse().unwrap();
        assert_eq!(temp, d.variance);
    }
}

// ---------------------------------------------------------------------------
// Inverted color assignment
// ---------------------------------------------------------------------------
#[test]
fn max_variance_is_red_min_variance_is_blue() {
    let ds = sample_dataset();
    let drawing = render_chart(&ds, &Layout::default()).unwrap();
    let max = drawing
        .cells
        .iter()
        .max_by(|a, b| a.datum.variance.total_cmp(&b.datum.variance))
        .unwrap();
    let min = drawing
        .cells
        .iter()
        .min_by(|a, b| a.datum.variance.total_cmp(&b.datum.variance))
        .unwrap();
    assert_eq!(max.element.get_style("fill"), Some("rgb(165, 0, 38)"));
    assert_eq!(min.element.get_style("fill"), Some("rgb(49, 54, 149)"));
}

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------
#[test]
fn bottom_axis_labels_only_decades_once_each() {
    let ds = sample_dataset();
    let root = render_chart(&ds, &Layout::default()).unwrap().to_element();
    let axis = root.find_by_id("x-axis").unwrap();
    let labels: Vec<String> = axis.select_class("tick").iter().map(|t| t.text_content()).collect();
    // First-seen order follows the descending input.
    assert_eq!(labels, vec!["1920", "1910", "1900"]);
}

#[test]
fn left_axis_uses_month_names_in_order() {
    let ds = sample_dataset();
    let root = render_chart(&ds, &Layout::default()).unwrap().to_element();
    let axis = root.find_by_id("y-axis").unwrap();
    let labels: Vec<String> = axis.select_class("tick").iter().map(|t| t.text_content()).collect();
    assert_eq!(labels, MONTH_NAMES.to_vec());
}

#[test]
fn fixed_identifiers_are_selectable() {
    let ds = sample_dataset();
    let root = render_chart(&ds, &Layout::default()).unwrap().to_element();
    for id in ["x-axis", "y-axis", "data-rect", "legend", "color-rect", "label-rect"] {
        assert!(root.find_by_id(id).is_some(), "missing #{}", id);
    }
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------
#[test]
fn rendering_twice_gives_identical_drawings() {
    let ds = sample_dataset();
    let mut first = Container::new();
    let mut second = Container::new();
    render_into(&ds, &mut first).unwrap();
    render_into(&ds, &mut second).unwrap();
    let a = first.drawing().unwrap();
    let b = second.drawing().unwrap();
    assert_eq!(a.cells.len(), b.cells.len());
    assert_eq!(a.to_element(), b.to_element());
    assert_eq!(a.fingerprint(), b.fingerprint());
}

// ---------------------------------------------------------------------------
// Tooltip scenario from a single observation
// ---------------------------------------------------------------------------
#[test]
fn single_entry_end_to_end() {
    let ds = Dataset {
        base_temperature: 9.0,
        monthly_variance: vec![obs(2000, 6, -1.2)],
    };
    let mut container = Container::new();
    render_into(&ds, &mut container).unwrap();
    let drawing = container.drawing_mut().unwrap();

    let root = drawing.to_element();
    let cells = root.select_class("cell");
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].get_attr("data-month"), Some("5"));
    assert_eq!(cells[0].get_attr("data-year"), Some("2000"));
    assert_eq!(cells[0].get_attr("data-temp"), Some("-1.2"));

    let mut tooltip = Tooltip::new();
    let cell = drawing.cell_at_mut(2000, 6).unwrap();
    cell.dispatch(CellEvent::MouseEnter, Pointer { page_x: 300.0, page_y: 200.0 }, &mut tooltip);
    cell.dispatch(CellEvent::MouseOver, Pointer { page_x: 300.0, page_y: 200.0 }, &mut tooltip);

    let text = tooltip.lines().join("\n");
    assert!(text.contains("June - 2000"));
    assert!(text.contains("7.80 ℃"));
    assert!(text.contains("-1.20 ℃"));
    assert_eq!(tooltip.position(), (320.0, 220.0));
    assert_eq!(cell.element.get_style("stroke"), Some("#333"));

    cell.dispatch(CellEvent::MouseOut, Pointer::default(), &mut tooltip);
    cell.dispatch(CellEvent::MouseLeave, Pointer::default(), &mut tooltip);
    assert_eq!(cell.element.get_style("stroke"), Some("none"));
    assert!(!tooltip.is_visible());
    assert_eq!(tooltip.lines().len(), 3);
}

#[test]
fn empty_dataset_leaves_container_empty() {
    let ds = Dataset {
        base_temperature: 8.66,
        monthly_variance: Vec::new(),
    };
    let mut container = Container::new();
    assert!(render_into(&ds, &mut container).is_err());
    assert!(container.is_empty());
}
