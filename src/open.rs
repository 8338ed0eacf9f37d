//! Host-application integration for interactive opens
//!
//! A thin glue layer around [read_volume](crate::read_volume) for hosts
//! that open files on behalf of a user: a menu action, a drag-and-drop, or
//! a generic unknown-file-type dispatch hook.
//!
//! Every failure is resolved here, at the point of detection, into a
//! logged diagnostic plus an empty result. Nothing escalates past this
//! layer and nothing is retried.

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::reader::read_volume;
use crate::volume::Volume;

// external crates
use log::warn;

/// How an open request reached the reader
///
/// A host that routes unknown file types through a generic dispatch hook
/// may re-enter the reader with the same path it is already opening. The
/// caller states which side of that hook it is on, and internal
/// invocations are dropped as no-ops so a file is never opened twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Requested directly, e.g. a menu action or a command line argument
    Direct,
    /// Re-dispatched by the host's unknown-file-type hook
    Internal,
}

/// External file-selection collaborator
///
/// Prompts the user for a file when no path was supplied. A dismissed
/// selection returns `None` and the open operation aborts silently, it is
/// not a failure.
pub trait FileSelector {
    /// The chosen path, or `None` when the selection was dismissed
    fn select_file(&self) -> Option<PathBuf>;
}

/// Open and decode one raw volume file, resolving all failures locally
///
/// Returns `None` for every failure branch after logging a diagnostic, and
/// silently for [Invocation::Internal] requests. There is no partial
/// result: either a fully decoded [Volume] comes back or nothing does.
pub fn open_volume<P: AsRef<Path>>(path: P, invocation: Invocation) -> Option<Volume> {
    // the dispatch hook re-enters with a path already being opened
    if invocation == Invocation::Internal {
        return None;
    }

    match read_volume(&path) {
        Ok(volume) => Some(volume),
        Err(error) => {
            warn!(
                "could not open \"{}\": {error}",
                path.as_ref().display()
            );
            None
        }
    }
}

/// Prompt for a file through the collaborator, then open it
///
/// A dismissed selection is a clean no-op abort with no diagnostic.
pub fn open_volume_interactive(selector: &dyn FileSelector) -> Option<Volume> {
    let path = selector.select_file()?;
    open_volume(path, Invocation::Direct)
}
