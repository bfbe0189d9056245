//! Preview server for the built site.
//!
//! The site is mounted at the path part of the configured base URL, so asset
//! links written by the build resolve the same way they will once deployed.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Options for one preview run.
#[derive(Debug, Clone)]
pub struct Preview {
    pub dir: PathBuf,
    pub port: u16,
    pub base_url: String,
    pub open: bool,
}

/// Run the serve command.
pub async fn run(preview: Preview) -> Result<()> {
    if !preview.dir.join("index.html").is_file() {
        anyhow::bail!(
            "No built site in {}. Run 'nexus-site build' first.",
            preview.dir.display()
        );
    }

    let mount = mount_path(&preview.base_url);
    let app = router(&preview.dir, &mount);

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, preview.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let url = format!("http://{}{}", addr, mount);
    tracing::info!("Serving {} at {}", preview.dir.display(), url);

    if preview.open {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(dir: &Path, mount: &str) -> Router {
    let files = ServeDir::new(dir);
    match mount.trim_end_matches('/') {
        "" => Router::new().fallback_service(files),
        prefix => Router::new().nest_service(prefix, files),
    }
}

/// Path under which the site is served: `/`, or `/sub/path/` for a site
/// deployed below the domain root. Absolute base URLs keep only their path.
fn mount_path(base_url: &str) -> String {
    let path = match base_url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => base_url,
    };

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn mounts_at_root_by_default() {
        assert_eq!(mount_path("/"), "/");
        assert_eq!(mount_path(""), "/");
        assert_eq!(mount_path("https://nexus.example.com"), "/");
    }

    #[test]
    fn mounts_below_sub_path() {
        assert_eq!(mount_path("/nexus-router/"), "/nexus-router/");
        assert_eq!(mount_path("docs/site"), "/docs/site/");
        assert_eq!(
            mount_path("https://mcp-tool-shop-org.github.io/nexus-router/"),
            "/nexus-router/"
        );
    }

    #[tokio::test]
    async fn refuses_unbuilt_directory() {
        let temp = tempdir().unwrap();

        let err = run(Preview {
            dir: temp.path().to_path_buf(),
            port: 0,
            base_url: "/".to_string(),
            open: false,
        })
        .await
        .unwrap_err();

        assert!(err.to_string().contains("nexus-site build"));
    }
}
