use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Parallel recursive directory walk.
///
/// Every regular file that passes the extension and size filters is sent on
/// `tx` together with its metadata.
///
/// # Errors
/// Returns an error if a root does not exist or the override patterns are invalid.
/// Errors on individual entries during traversal are logged and skipped.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    tx: &Sender<(PathBuf, std::fs::Metadata)>,
) -> Result<()> {
    let Some((first, rest)) = options.roots.split_first() else {
        return Ok(());
    };

    for root in &options.roots {
        if !root.exists() {
            return Err(EngineError::Config(format!(
                "No such file or directory: {}",
                root.display()
            )));
        }
    }

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links);

    if let Some(depth) = options.max_depth {
        builder.max_depth(Some(depth));
    }

    // ignore crate only supports one Overrides instance per WalkBuilder.
    // Exclude patterns use the `!` prefix convention.
    if !options.override_include.is_empty() || !options.override_exclude.is_empty() {
        let mut ov_builder = ignore::overrides::OverrideBuilder::new(first);
        for ov in &options.override_include {
            ov_builder.add(ov)?;
        }
        for ov in &options.override_exclude {
            ov_builder.add(&format!("!{ov}"))?;
        }
        builder.overrides(ov_builder.build()?);
    }

    log::debug!(
        "walking {} root(s) with {} thread(s)",
        options.roots.len(),
        options.threads
    );

    let filters = filters.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }

        if !filters.allows_path(entry.path()) {
            return false;
        }

        if (filters.min_size.is_some() || filters.max_size.is_some())
            && let Ok(meta) = entry.metadata()
            && !filters.allows_size(meta.len())
        {
            return false;
        }

        true
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    match entry.metadata() {
                        Ok(meta) => {
                            if tx.send((entry.path().to_owned(), meta)).is_err() {
                                return ignore::WalkState::Quit;
                            }
                        }
                        Err(e) => log::warn!("{}: {e}", entry.path().display()),
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("walk: {e}"),
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilterConfigBuilder, WalkOptionsBuilder};
    use std::fs;

    fn collect(options: &WalkOptions, filters: &FilterConfig) -> Vec<PathBuf> {
        let (tx, rx) = crossbeam_channel::unbounded();
        walk_parallel(options, filters, &tx).unwrap();
        drop(tx);
        let mut paths: Vec<_> = rx.into_iter().map(|(p, _)| p).collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_walk_applies_extension_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/B.JAVA"), "class B {}").unwrap();

        let options = WalkOptionsBuilder::default()
            .roots(vec![dir.path().to_path_buf()])
            .build()
            .unwrap();
        let filters = FilterConfigBuilder::default()
            .allow_ext(vec![".java".to_string()])
            .build()
            .unwrap();

        let paths = collect(&options, &filters);
        assert_eq!(
            paths,
            vec![dir.path().join("A.java"), dir.path().join("pkg/B.JAVA")]
        );
    }

    #[test]
    fn test_walk_without_allow_list_sends_everything() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let options = WalkOptionsBuilder::default()
            .roots(vec![dir.path().to_path_buf()])
            .build()
            .unwrap();

        assert_eq!(collect(&options, &FilterConfig::default()).len(), 2);
    }

    #[test]
    fn test_walk_applies_max_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Small.java"), "a").unwrap();
        fs::write(dir.path().join("Large.java"), "a".repeat(100)).unwrap();

        let options = WalkOptionsBuilder::default()
            .roots(vec![dir.path().to_path_buf()])
            .build()
            .unwrap();
        let filters = FilterConfig {
            max_size: Some(10),
            ..FilterConfig::default()
        };

        assert_eq!(
            collect(&options, &filters),
            vec![dir.path().join("Small.java")]
        );
    }

    #[test]
    fn test_walk_missing_root_is_config_error() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let options = WalkOptionsBuilder::default()
            .roots(vec![PathBuf::from("/definitely/not/here")])
            .build()
            .unwrap();
        let err = walk_parallel(&options, &FilterConfig::default(), &tx).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
