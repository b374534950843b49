// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Searches `path` and each of its ancestors for `filename`.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// Where the configuration should be read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Passed on the command line, so it must exist.
    Explicit(PathBuf),
    /// Found by searching upwards from the working directory.
    Found(PathBuf),
    /// The per-user default, used only if it exists.
    Default(PathBuf),
    /// No candidate at all, defaults apply.
    None,
}

impl ConfigLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigLocation::Explicit(p) | ConfigLocation::Found(p) | ConfigLocation::Default(p) => {
                Some(p)
            }
            ConfigLocation::None => None,
        }
    }
}

pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> ConfigLocation {
    if let Some(cli_file) = cli_file {
        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return ConfigLocation::Explicit(cli_file.to_path_buf());
        }

        // config is passed in and is relative
        return ConfigLocation::Explicit(clean(cwd.join(cli_file)));
    }

    // search from cwd
    if let Some(found) = find_in_parent(cwd, default_filename) {
        return ConfigLocation::Found(found);
    }

    match default_config_dir {
        Some(dir) => ConfigLocation::Default(clean(dir.join(default_filename))),
        None => ConfigLocation::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const NAME: &str = "gf2poly.config.yaml";

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/foo/gf2poly.config.yaml"))
    }

    #[test]
    fn test_resolve_cli() -> Result<()> {
        let cwd = PathBuf::from("/foo/bar");
        let config_dir = PathBuf::from("/my/config");

        let location = resolve_config_path(not_found, &cwd, Some(&config_dir), NAME, None);
        assert_eq!(
            location,
            ConfigLocation::Default(PathBuf::from("/my/config/gf2poly.config.yaml"))
        );

        // explicit file wins over a found one
        let location = resolve_config_path(
            found,
            &cwd,
            Some(&config_dir),
            NAME,
            Some(Path::new("/my/absolute/conf.yaml")),
        );
        assert_eq!(
            location,
            ConfigLocation::Explicit(PathBuf::from("/my/absolute/conf.yaml"))
        );

        let location = resolve_config_path(
            not_found,
            &cwd,
            None,
            NAME,
            Some(Path::new("../conf.yaml")),
        );
        assert_eq!(
            location,
            ConfigLocation::Explicit(PathBuf::from("/foo/conf.yaml"))
        );

        let location = resolve_config_path(found, &cwd, Some(&config_dir), NAME, None);
        assert_eq!(
            location.path(),
            Some(Path::new("/foo/gf2poly.config.yaml"))
        );

        assert_eq!(
            resolve_config_path(not_found, &cwd, None, NAME, None),
            ConfigLocation::None
        );
        Ok(())
    }

    #[test]
    fn test_find_in_parent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(dir.path().join("a").join(NAME), "modulus: 283\n")?;

        assert_eq!(
            find_in_parent(&nested, NAME),
            Some(dir.path().join("a").join(NAME))
        );
        assert_eq!(find_in_parent(&nested, "missing.yaml"), None);
        Ok(())
    }
}
