//! Compression and indexing through external tools
//!
//! `bgzip` and `bcftools` are run as black boxes. The program names are
//! configurable so a stub can stand in for either tool.

use crate::core::error::{ExternalToolError, ToolResult};
use crate::core::validate::OutputPaths;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Default block-gzip program
pub const DEFAULT_BGZIP: &str = "bgzip";

/// Default indexing program
pub const DEFAULT_BCFTOOLS: &str = "bcftools";

/// A single external command: program plus positional arguments
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Name used in diagnostics
    pub fn name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Run to completion, failing on launch errors or a non-zero exit
    ///
    /// stdout and stderr are inherited so tool diagnostics reach the user.
    pub fn run(&self) -> ToolResult<()> {
        log::debug!("running {:?} {:?}", self.program, self.args);

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| ExternalToolError::Launch {
                tool: self.name(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExternalToolError::Failed {
                tool: self.name(),
                code: status.code(),
            })
        }
    }
}

/// Compresses the filtered VCF and builds its CSI index
#[derive(Debug, Clone)]
pub struct PostProcessor {
    pub bgzip: OsString,
    pub bcftools: OsString,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self {
            bgzip: DEFAULT_BGZIP.into(),
            bcftools: DEFAULT_BCFTOOLS.into(),
        }
    }
}

impl PostProcessor {
    pub fn new<S: Into<OsString>>(bgzip: S, bcftools: S) -> Self {
        Self {
            bgzip: bgzip.into(),
            bcftools: bcftools.into(),
        }
    }

    /// `bgzip <plain>`; the tool replaces the plain file with `<plain>.gz`
    pub fn compress_command(&self, plain: &Path) -> ToolCommand {
        ToolCommand::new(self.bgzip.clone()).arg(plain)
    }

    /// `bcftools index <compressed>`; writes `<compressed>.csi`
    pub fn index_command(&self, compressed: &Path) -> ToolCommand {
        ToolCommand::new(self.bcftools.clone()).arg("index").arg(compressed)
    }

    /// Compress then index, checking each expected artifact exists afterwards
    ///
    /// Must only be called once the plain output has been flushed and closed.
    pub fn run(&self, paths: &OutputPaths) -> ToolResult<()> {
        let compress = self.compress_command(&paths.plain);
        compress.run()?;
        expect_artifact(&compress, &paths.compressed)?;
        log::info!("compressed output written to {:?}", paths.compressed);

        let index = self.index_command(&paths.compressed);
        index.run()?;
        expect_artifact(&index, &paths.index)?;
        log::info!("index written to {:?}", paths.index);

        Ok(())
    }
}

fn expect_artifact(command: &ToolCommand, path: &Path) -> ToolResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ExternalToolError::MissingOutput {
            tool: command.name(),
            path: path.to_path_buf(),
        })
    }
}
