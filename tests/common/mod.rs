#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An inventory root with `environments/<name>` directories and a fake
/// provisioning tool that prints `outputs.json` from its working directory.
pub struct Workspace {
    pub root: TempDir,
    pub tool: PathBuf,
}

impl Workspace {
    pub fn new() -> anyhow::Result<Self> {
        let root = TempDir::new()?;
        let tool = root.path().join("fake-tofu");
        write_script(
            &tool,
            r#"#!/bin/sh
if [ "$1" != "output" ] || [ "$2" != "-json" ]; then
    echo "unexpected arguments: $*" >&2
    exit 64
fi
if [ -f fail.txt ]; then
    cat fail.txt >&2
    exit 1
fi
cat outputs.json
"#,
        )?;
        Ok(Self { root, tool })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn add_environment(&self, name: &str, outputs: &str) -> anyhow::Result<PathBuf> {
        let dir = self.path().join("environments").join(name);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("outputs.json"), outputs)?;
        Ok(dir)
    }

    pub fn fail_environment(&self, name: &str, stderr: &str) -> anyhow::Result<()> {
        let dir = self.path().join("environments").join(name);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("fail.txt"), stderr)?;
        Ok(())
    }
}

fn write_script(path: &Path, body: &str) -> anyhow::Result<()> {
    std::fs::write(path, body)?;
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}
