//! Print what hovering one cell shows: `hover <year> <month> [pageX pageY]`.

use heatcal::config::Config;
use heatcal::data::fetch_dataset;
use heatcal::interact::{CellEvent, Pointer, Tooltip};
use heatcal::logging::Level;
use heatcal::render::{render_chart, Layout};
use std::env;

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, name: &str) -> T {
    match args.get(i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("usage: hover <year> <month> [pageX pageY] (bad or missing {})", name);
            std::process::exit(2);
        }
    }
}

/// Records share stdout with the report, so only warnings and worse go
/// there unless LOG_LEVEL asks for more.
fn report_log_level(configured: Option<String>) -> String {
    configured.unwrap_or_else(|| Level::Warn.as_str().to_string())
}

#[tokio::main]
async fn main() {
    env::set_var("LOG_LEVEL", report_log_level(env::var("LOG_LEVEL").ok()));
    let args: Vec<String> = env::args().collect();
    let year: i32 = parse_arg(&args, 1, "year");
    let month: i32 = parse_arg(&args, 2, "month");
    let pointer = Pointer {
        page_x: args.get(3).and_then(|v| v.parse().ok()).unwrap_or(0.0),
        page_y: args.get(4).and_then(|v| v.parse().ok()).unwrap_or(0.0),
    };

    let cfg = Config::from_env();
    let source = match cfg.source() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("config error: {}", err);
            std::process::exit(1);
        }
    };
    let dataset = match fetch_dataset(&*source).await {
        Ok(d) => d,
        Err(err) => {
            eprintln!("load failed ({}): {}", source.describe(), err);
            std::process::exit(1);
        }
    };
    let mut drawing = match render_chart(&dataset, &Layout::default()) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("render failed: {}", err);
            std::process::exit(1);
        }
    };

    let Some(cell) = drawing.cell_at_mut(year, month) else {
        eprintln!("no cell for {}-{:02}", year, month);
        std::process::exit(3);
    };
    let mut tooltip = Tooltip::new();
    cell.dispatch(CellEvent::MouseEnter, pointer, &mut tooltip);
    cell.dispatch(CellEvent::MouseOver, pointer, &mut tooltip);

    let (left, top) = tooltip.position();
    println!("tooltip at ({}, {})", left, top);
    for line in tooltip.lines() {
        println!("  {}", line);
    }
    println!(
        "cell fill={} stroke={}",
        cell.element.get_style("fill").unwrap_or("-"),
        cell.element.get_style("stroke").unwrap_or("-")
    );
}
