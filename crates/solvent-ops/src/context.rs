//! Everything an operation needs before it can build a universe: the
//! configuration, the directory it is rooted at and the loaded catalog.

use std::path::{Path, PathBuf};

use solvent_core::catalog::Catalog;
use solvent_core::config::ResolverConfig;
use solvent_core::request::Request;
use solvent_resolver::session::Resolver;

/// Command-line overrides for the configuration file.
#[derive(Debug, Default, Clone)]
pub struct ContextOptions {
    /// Explicit `solvent.toml`; otherwise discovered from the working directory.
    pub config: Option<PathBuf>,
    /// Catalog file, relative to the working directory.
    pub catalog: Option<PathBuf>,
    pub target_platform: Option<String>,
}

/// Loaded configuration and catalog for one invocation.
#[derive(Debug)]
pub struct ResolveContext {
    pub config: ResolverConfig,
    /// Directory holding the configuration file, or the working directory.
    pub root: PathBuf,
    pub catalog: Catalog,
}

impl ResolveContext {
    pub fn load(cwd: &Path, opts: &ContextOptions) -> miette::Result<Self> {
        let (mut config, root) = match &opts.config {
            Some(path) => {
                let path = cwd.join(path);
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                (ResolverConfig::from_path(&path)?, root)
            }
            None => ResolverConfig::discover(cwd)?,
        };
        if let Some(platform) = &opts.target_platform {
            config.target_platform = Some(platform.clone());
        }

        let catalog_path = match &opts.catalog {
            Some(path) => cwd.join(path),
            None => config.catalog_path(&root),
        };
        tracing::debug!("Loading catalog {}", catalog_path.display());
        let catalog = Catalog::from_path(&catalog_path)?;
        tracing::debug!("Catalog holds {} packages", catalog.len());

        Ok(Self {
            config,
            root,
            catalog,
        })
    }

    /// A fresh resolution session for the configured target platform.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.config.target_platform.clone())
    }
}

/// Load the request at `path` (relative to `cwd`), if one was given.
pub fn load_request(cwd: &Path, path: Option<&Path>) -> miette::Result<Option<Request>> {
    path.map(|p| Request::from_path(&cwd.join(p))).transpose()
}
