//! Filesystem listing for path tokens.

use std::path::Path;

use tracing::{debug, trace};

use crate::candidate::Candidate;

/// Splits a token into its directory part and the basename prefix.
///
/// The directory keeps a lone root (`/`) but drops other trailing
/// slashes. A token without `/` has no directory part.
pub(crate) fn split_token(token: &str) -> (Option<&str>, &str) {
    match token.rfind('/') {
        None => (None, token),
        Some(idx) => {
            let head = &token[..=idx];
            let trimmed = head.trim_end_matches('/');
            let dir = if trimmed.is_empty() { head } else { trimmed };
            (Some(dir), &token[idx + 1..])
        }
    }
}

fn join_label(dir: Option<&str>, name: &str) -> String {
    match dir {
        None => name.to_string(),
        Some(dir) if dir.ends_with('/') => format!("{dir}{name}"),
        Some(dir) => format!("{dir}/{name}"),
    }
}

/// Lists the entries of the token's directory whose names start with the
/// token's basename. Directories get a trailing `/`.
///
/// Any failure to read the directory yields no candidates.
pub(crate) fn list_candidates(base: &Path, token: &str) -> Vec<Candidate> {
    let (dir, prefix) = split_token(token);
    let listing = match dir {
        Some(dir) => base.join(dir),
        None => base.to_path_buf(),
    };

    let entries = match std::fs::read_dir(&listing) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %listing.display(), error = %e, "Cannot list directory for completion");
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(name) = entry.file_name().into_string() else {
            trace!(dir = %listing.display(), "Skipping non UTF-8 entry");
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        let mut label = join_label(dir, &name);
        if entry.path().is_dir() {
            label.push('/');
        }
        candidates.push(Candidate::plain(label));
    }
    candidates
}
