use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::RecycleOptions;
use crate::error::{Error, Result};
use crate::native_array::NativeStringArray;
use crate::resolve::{FullPathResolver, PathResolver};
use crate::shell::{FileOpFlags, FileOpRequest, FileOperation, OperationKind};
use crate::wide::PathList;

/// Empty destination list for `pTo`.
const NO_DESTINATION: [u16; 2] = [0, 0];

/// Sends batches of paths to the Recycle Bin through a [`FileOperation`].
///
/// Each call is a single blocking shell operation. Success is all or
/// nothing: the shell does not say which entries were handled when it fails.
#[derive(Debug)]
pub struct Recycler<F, R = FullPathResolver> {
    operation: F,
    resolver: R,
    progress_title: Vec<u16>,
}

impl<F: FileOperation> Recycler<F> {
    pub fn new(operation: F, options: &RecycleOptions) -> Self {
        let resolver = FullPathResolver::new(options.max_path_len);
        Self::with_resolver(operation, resolver, options)
    }
}

impl<F: FileOperation, R: PathResolver> Recycler<F, R> {
    pub fn with_resolver(operation: F, resolver: R, options: &RecycleOptions) -> Self {
        Self {
            operation,
            resolver,
            progress_title: options
                .progress_title
                .encode_utf16()
                .chain(std::iter::once(0))
                .collect(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Move `paths` to the Recycle Bin.
    ///
    /// `confirmed` suppresses the shell's confirmation prompt. Every path is
    /// resolved before the shell is called, so a resolution error leaves all
    /// files in place.
    pub fn recycle<P: AsRef<Path>>(&self, paths: &[P], confirmed: bool) -> Result<()> {
        if paths.is_empty() {
            debug!("nothing to recycle");
            return Ok(());
        }

        let resolved = paths
            .iter()
            .map(|p| self.resolver.resolve(p.as_ref()))
            .collect::<Result<Vec<PathBuf>>>()?;

        let from = PathList::from_paths(&resolved)?.finish();
        let request = FileOpRequest {
            kind: OperationKind::Delete,
            from: &from,
            to: &NO_DESTINATION,
            flags: FileOpFlags::for_recycle(confirmed),
            progress_title: &self.progress_title,
        };

        debug!(
            count = resolved.len(),
            units = from.len(),
            flags = request.flags.bits(),
            "invoking shell file operation"
        );
        let response = self.operation.perform(&request);

        if response.status != 0 {
            warn!(status = response.status, "recycle failed");
            return Err(Error::Shell {
                status: response.status,
            });
        }
        if response.any_aborted {
            warn!("recycle aborted");
            return Err(Error::Aborted);
        }

        info!(count = resolved.len(), "recycled");
        Ok(())
    }

    /// [`Recycler::recycle`] fed from a native array. Every slot must be set.
    pub fn recycle_native(&self, array: &NativeStringArray, confirmed: bool) -> Result<()> {
        let paths = array.to_paths()?;
        self.recycle(&paths, confirmed)
    }

    /// [`Recycler::recycle`] collapsed to a success flag.
    pub fn recycle_ok<P: AsRef<Path>>(&self, paths: &[P], confirmed: bool) -> bool {
        match self.recycle(paths, confirmed) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "recycle reported failure");
                false
            }
        }
    }
}
