use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, trace};
use serde::Deserialize;

use cs_core::ports::{ResourceLabelPort, ResourceRef, ThemeHint};

type PackageTable = HashMap<String, HashMap<String, String>>;

/// On-disk layout:
///
/// ```toml
/// [packages."com.example.sync"]
/// "1001" = "Coworkers"
///
/// [themes.dark."com.example.sync"]
/// "1001" = "Coworkers (dark)"
/// ```
#[derive(Debug, Default, Deserialize)]
struct LabelFile {
    #[serde(default)]
    packages: PackageTable,
    #[serde(default)]
    themes: HashMap<String, PackageTable>,
}

/// Resource labels loaded once from a TOML file.
#[derive(Debug, Default, Clone)]
pub struct TomlResourceLabels {
    base: HashMap<(String, i32), String>,
    themed: HashMap<(String, String, i32), String>,
}

impl TomlResourceLabels {
    /// A table that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LabelFile = toml::from_str(content).context("Failed to parse resource labels")?;

        let mut labels = Self::empty();
        for (package, entries) in file.packages {
            for (id, text) in entries {
                let id = parse_resource_id(&package, &id)?;
                labels.base.insert((package.clone(), id), text);
            }
        }
        for (theme, packages) in file.themes {
            for (package, entries) in packages {
                for (id, text) in entries {
                    let id = parse_resource_id(&package, &id)?;
                    labels.themed.insert((theme.clone(), package.clone(), id), text);
                }
            }
        }

        debug!(
            "loaded {} resource labels ({} themed)",
            labels.base.len(),
            labels.themed.len()
        );
        Ok(labels)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resource labels: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid resource labels file: {}", path.display()))
    }

    fn lookup(&self, resource: &ResourceRef, theme: &ThemeHint) -> Option<&String> {
        let themed = match theme {
            ThemeHint::Named(name) => self.themed.get(&(
                name.clone(),
                resource.package.clone(),
                resource.resource_id,
            )),
            ThemeHint::Default => None,
        };
        themed.or_else(|| {
            self.base
                .get(&(resource.package.clone(), resource.resource_id))
        })
    }
}

fn parse_resource_id(package: &str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .with_context(|| format!("Invalid resource id {raw:?} in package {package}"))
}

#[async_trait]
impl ResourceLabelPort for TomlResourceLabels {
    async fn resolve_text(&self, resource: &ResourceRef, theme: &ThemeHint) -> Option<String> {
        let text = self.lookup(resource, theme).cloned();
        if text.is_none() {
            trace!(
                "no label for {}:{}",
                resource.package,
                resource.resource_id
            );
        }
        text
    }
}
