use std::{fs, io::Cursor, path::Path};

use anyhow::{Context, Result};

use crate::env::EnvMap;

pub fn load_env_file(path: &Path, env: &mut EnvMap) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading env file {}", path.display()))?;
    let iter = dotenvy::from_read_iter(Cursor::new(content));

    for item in iter {
        let (key, value) = item.with_context(|| format!("parsing env file {}", path.display()))?;
        env.insert(key, value);
    }

    Ok(())
}

/// Process environment merged over `env`: a variable exported in the shell
/// wins over the same variable from a `.env` file.
pub fn merged_process_env(env: &EnvMap) -> EnvMap {
    let mut merged = env.clone();
    merged.extend(std::env::vars());
    merged
}
