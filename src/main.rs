use anyhow::{anyhow, Result};
use std::path::Path;

use heatcal::config::Config;
use heatcal::data::load_into;
use heatcal::logging::{log, log_load_failure, obj, v_num, v_str, Domain, Level};
use heatcal::render::{render_into, Page};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("source", v_str(cfg.data_file.as_deref().unwrap_or(&cfg.data_url))),
            ("out", v_str(&cfg.out_path)),
        ]),
    );

    let mut page = Page::new(&cfg.title);
    match cfg.source() {
        Ok(source) => {
            if let Some(dataset) = load_into(&*source, &mut page.description).await {
                if let Err(err) = render_into(&dataset, &mut page.container) {
                    log(
                        Level::Error,
                        Domain::Render,
                        "render.failed",
                        obj(&[("msg", v_str(&err.to_string()))]),
                    );
                }
            }
        }
        Err(err) => log_load_failure(&cfg.data_url, "config", &err.to_string()),
    }

    let out = Path::new(&cfg.out_path);
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow!("failed to create {}: {}", parent.display(), e))?;
    }
    let html = page.to_html();
    std::fs::write(out, &html).map_err(|e| anyhow!("failed to write {}: {}", out.display(), e))?;

    log(
        Level::Info,
        Domain::System,
        "page.written",
        obj(&[
            ("path", v_str(&cfg.out_path)),
            ("bytes", v_num(html.len() as f64)),
            ("chart", v_str(if page.container.is_empty() { "empty" } else { "mounted" })),
        ]),
    );
    Ok(())
}
