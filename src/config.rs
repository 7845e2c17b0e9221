use std::path::{Path, PathBuf};

use crate::patch::Replacement;

/// File rewritten by the patcher, relative to the working directory
pub const TARGET_PATH: &str = "lib/noteService.ts";

/// Substitutions applied to the target, in order
pub const RULES: [Replacement; 3] = [
    Replacement::new(
        ".select('id, name')",
        ".select('user_id, name')",
        ".select('id, name') → .select('user_id, name')",
    ),
    Replacement::new(
        ".in('id', clientIds)",
        ".in('user_id', clientIds)",
        ".in('id', clientIds) → .in('user_id', clientIds)",
    ),
    Replacement::new(
        "acc[client.id] = client.name",
        "acc[client.user_id] = client.name",
        "acc[client.id] → acc[client.user_id]",
    ),
];

/// Resolve [`TARGET_PATH`] against `workdir`
pub fn target_path(workdir: impl AsRef<Path>) -> PathBuf {
    workdir.as_ref().join(TARGET_PATH)
}
