use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::{Table, Value};

use crate::error::StartError;

/// The workspace `Cargo.toml`, held as a full TOML document so unrelated
/// sections survive the rewrite.
pub struct Manifest {
    path: PathBuf,
    doc: Table,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
        let doc: Table = raw
            .parse()
            .with_context(|| format!("Cannot parse manifest '{}'", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Append `member` to `workspace.members`, keeping the existing order.
    /// A member that is already listed is left alone.
    pub fn add_member(&mut self, member: &str) -> Result<()> {
        let members = self.members_mut()?;
        if members.iter().any(|m| m.as_str() == Some(member)) {
            return Ok(());
        }
        members.push(Value::String(member.to_string()));
        Ok(())
    }

    /// Rewrite the manifest in place. Not transactional.
    pub fn save(&self) -> Result<()> {
        let rendered = toml::to_string(&self.doc)?;
        std::fs::write(&self.path, rendered)
            .with_context(|| format!("Cannot write manifest '{}'", self.path.display()))?;
        Ok(())
    }

    fn members_mut(&mut self) -> Result<&mut Vec<Value>> {
        let workspace = self
            .doc
            .get_mut("workspace")
            .and_then(Value::as_table_mut)
            .ok_or(StartError::ManifestSchema("a [workspace] table"))?;
        let members = workspace
            .get_mut("members")
            .and_then(Value::as_array_mut)
            .ok_or(StartError::ManifestSchema("a workspace.members array"))?;
        Ok(members)
    }
}
