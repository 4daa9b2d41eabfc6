//! Static export: write every page and asset to a directory.
//!
//! Layout mirrors the server's URLs so the output can be dropped onto any
//! static host:
//!
//! ```text
//! <out>/index.html
//! <out>/topic/<slug>/index.html
//! <out>/assets/site.css
//! <out>/assets/site.js
//! ```

use std::path::{Path, PathBuf};

use explained_core::{ConfigProvider, Error, Result};
use tokio::fs;
use tracing::{debug, info};

use crate::assets;
use crate::render;
use crate::state::SiteState;

/// Summary of a completed export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub assets: usize,
    pub bytes: u64,
}

/// Render the whole site into `output_dir`.
///
/// Refuses to write into a directory that already has entries unless
/// `force` is set; with `force`, existing files at the same paths are
/// overwritten and other files are left alone.
pub async fn export_site<C: ConfigProvider>(
    state: &SiteState<C>,
    output_dir: &Path,
    force: bool,
) -> Result<ExportReport> {
    if !force && has_entries(output_dir).await? {
        return Err(Error::config(format!(
            "output directory {} is not empty (use --force to overwrite)",
            output_dir.display()
        )));
    }

    let store = state.store();
    let ctx = state.page_context();
    let mut report = ExportReport {
        output_dir: output_dir.to_path_buf(),
        pages: 0,
        assets: 0,
        bytes: 0,
    };

    let home = render::home_page(&store, &ctx).into_string();
    report.bytes += write_file(&output_dir.join("index.html"), home.as_bytes()).await?;
    report.pages += 1;

    for topic in store.topics() {
        let path = output_dir.join("topic").join(topic.slug).join("index.html");
        let html = render::topic_page(&store, topic, &ctx).into_string();
        report.bytes += write_file(&path, html.as_bytes()).await?;
        report.pages += 1;
    }

    for asset in assets::ALL {
        let path = output_dir.join("assets").join(asset.name);
        report.bytes += write_file(&path, asset.body.as_bytes()).await?;
        report.assets += 1;
    }

    info!(
        pages = report.pages,
        assets = report.assets,
        bytes = report.bytes,
        "Exported site to {}",
        output_dir.display()
    );
    Ok(report)
}

async fn has_entries(dir: &Path) -> Result<bool> {
    match fs::read_dir(dir).await {
        Ok(mut entries) => Ok(entries
            .next_entry()
            .await
            .map_err(|e| Error::io_with_path(e, dir))?
            .is_some()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io_with_path(e, dir)),
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io_with_path(e, parent))?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(contents.len() as u64)
}
