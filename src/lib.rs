// notepatch - renames the client id field to user_id in lib/noteService.ts

pub mod config;
pub mod document;
pub mod error;
pub mod patch;
pub mod report;

use std::path::Path;
use tracing::{info, trace};

use crate::document::Document;
use crate::error::Result;
use crate::patch::{PatchOutcome, Replacement};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Patch the file at `path` with the built-in rule set
pub fn run(path: impl AsRef<Path>) -> Result<PatchOutcome> {
    run_with_rules(path, &config::RULES)
}

/// Read `path`, apply `rules` in order and overwrite the file with the result.
/// The file is rewritten even when no rule matched.
pub fn run_with_rules(path: impl AsRef<Path>, rules: &[Replacement]) -> Result<PatchOutcome> {
    let mut doc = Document::read(path)?;
    let outcome = patch::apply_all(&doc.content, rules);

    trace!(
        "Patch preview:\n{}",
        patch::diff_preview(&doc.content, &outcome.content, &doc.path.to_string_lossy())
    );

    doc.set_content(outcome.content.clone());
    doc.write()?;

    info!(
        "Patched {}: {} replacement(s)",
        doc.path.display(),
        outcome.total()
    );
    Ok(outcome)
}

/// Initialize logging to stderr, filtered by `RUST_LOG` with `default_level` as fallback
pub fn init_with_logger(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    const NOTE_SERVICE: &str = r#"export async function getNotesWithClients(clientIds: string[]) {
  const { data: clients } = await supabase
    .from('profiles')
    .select('id, name')
    .in('id', clientIds);

  return (clients ?? []).reduce((acc, client) => {
    acc[client.id] = client.name;
    return acc;
  }, {} as Record<string, string>);
}
"#;

    fn write_target(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = config::target_path(dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_rewrites_target() {
        let dir = tempdir().unwrap();
        let path = write_target(dir.path(), NOTE_SERVICE);

        let outcome = run(&path).unwrap();
        assert_eq!(outcome.counts, vec![1, 1, 1]);

        let patched = fs::read_to_string(&path).unwrap();
        assert!(patched.contains(".select('user_id, name')"));
        assert!(patched.contains(".in('user_id', clientIds)"));
        assert!(patched.contains("acc[client.user_id] = client.name;"));
        assert!(!patched.contains("'id, name'"));
        assert!(!patched.contains(".in('id',"));
        assert!(!patched.contains("client.id]"));
    }

    #[test]
    fn test_run_without_matches_keeps_bytes() {
        let dir = tempdir().unwrap();
        let original = "export const x = 'id';\r\n// acc[client.name]\n";
        let path = write_target(dir.path(), original);

        let outcome = run(&path).unwrap();
        assert!(!outcome.changed());
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn test_run_twice_matches_single_run() {
        let dir = tempdir().unwrap();
        let path = write_target(dir.path(), NOTE_SERVICE);

        run(&path).unwrap();
        let after_one = fs::read_to_string(&path).unwrap();

        let second = run(&path).unwrap();
        assert!(!second.changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), after_one);
    }

    #[test]
    fn test_run_missing_target_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = config::target_path(dir.path());

        let err = run(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!path.exists());
        assert!(!dir.path().join("lib").exists());
    }
}
