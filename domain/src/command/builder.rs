//! Engine invocation assembly
//!
//! Pure: no filesystem, clock or environment access. Relative paths are
//! joined onto the caller's directory because the command runs from the
//! workflow directory instead, then `.` and `..` segments are folded away
//! lexically (symlinks are not resolved).

use super::config_key::ConfigKey;
use super::invocation::InvocationCommand;
use crate::environment::strategy::ToolResolution;
use crate::launch::request::{InputSource, LaunchRequest};
use std::path::{Component, Path, PathBuf};

/// Engine parallelism flag
pub const CORES_FLAG: &str = "--cores";
/// Start of the `KEY=value` block
pub const CONFIG_FLAG: &str = "--config";
/// Summary-only output mode
pub const QUIET_FLAG: [&str; 2] = ["-q", "rules"];

/// Builds the engine call for a validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
    workflow_dir: PathBuf,
    caller_dir: PathBuf,
}

impl CommandBuilder {
    /// * `program`: engine executable
    /// * `workflow_dir`: where the workflow definitions live; the command runs there
    /// * `caller_dir`: base for resolving relative request paths
    pub fn new(
        program: impl Into<String>,
        workflow_dir: impl Into<PathBuf>,
        caller_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            workflow_dir: workflow_dir.into(),
            caller_dir: caller_dir.into(),
        }
    }

    pub fn build(&self, request: &LaunchRequest, resolution: &ToolResolution) -> InvocationCommand {
        let mut args = vec![
            CORES_FLAG.to_string(),
            request.cores().to_string(),
            CONFIG_FLAG.to_string(),
        ];

        let input_key = match request.input() {
            InputSource::Assemblies(_) => ConfigKey::GenomesDir,
            InputSource::Genes(_) => ConfigKey::GenesDir,
        };
        args.push(input_key.pair(self.absolute(request.input().path()).display()));
        args.push(ConfigKey::OutDir.pair(self.absolute(request.outdir()).display()));
        args.push(ConfigKey::Prefix.pair(request.prefix()));

        if let Some(selection) = request.core_selection() {
            args.push(ConfigKey::Core.pair(selection.to_config_value()));
        }

        args.extend(resolution.environment_flag().iter().cloned());
        args.extend(QUIET_FLAG.iter().map(|s| s.to_string()));

        InvocationCommand::new(self.program.clone(), args, self.workflow_dir.clone())
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.caller_dir.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::strategy::EnvironmentManager;
    use crate::launch::pangenome_tool::PangenomeTool;
    use crate::launch::request::LaunchArgs;

    fn builder() -> CommandBuilder {
        CommandBuilder::new("snakemake", "/opt/fixcore", "/home/user/project")
    }

    fn conda() -> ToolResolution {
        ToolResolution::new(
            EnvironmentManager::Conda,
            ["--use-conda", "--conda-frontend", "conda"],
        )
    }

    fn genes_request() -> LaunchRequest {
        LaunchArgs::default()
            .with_genes_dir("/data/genes")
            .with_outdir("/out")
            .with_prefix("job1")
            .validate()
            .unwrap()
    }

    fn assemblies_request() -> LaunchRequest {
        LaunchArgs::default()
            .with_cores(16)
            .with_assemblies_dir("asm")
            .with_pangenome_tool(PangenomeTool::Roary)
            .with_threshold(0.95)
            .validate()
            .unwrap()
    }

    #[test]
    fn genes_command_shape() {
        let cmd = builder().build(&genes_request(), &conda());
        assert_eq!(cmd.program(), "snakemake");
        assert_eq!(cmd.working_dir(), Path::new("/opt/fixcore"));
        assert_eq!(
            cmd.args(),
            [
                "--cores",
                "4",
                "--config",
                "GENES_DIR=/data/genes",
                "OUTDIR=/out",
                "PREFIX=job1",
                "--use-conda",
                "--conda-frontend",
                "conda",
                "-q",
                "rules",
            ]
        );
        assert!(!cmd.has_config_key(ConfigKey::Core));
        assert!(!cmd.has_config_key(ConfigKey::GenomesDir));
    }

    #[test]
    fn assemblies_command_shape() {
        let resolution = ToolResolution::new(EnvironmentManager::Apptainer, ["--sdm", "apptainer"]);
        let cmd = builder().build(&assemblies_request(), &resolution);
        assert_eq!(
            cmd.args(),
            [
                "--cores",
                "16",
                "--config",
                "GENOMES_DIR=/home/user/project/asm",
                "OUTDIR=/home/user/project/bdpp_output",
                "PREFIX=fixcore_job",
                "CORE={TOOL: roary, THRESHOLD: 0.95}",
                "--sdm",
                "apptainer",
                "-q",
                "rules",
            ]
        );
        assert!(!cmd.has_config_key(ConfigKey::GenesDir));
    }

    #[test]
    fn genes_with_tool_has_no_core_entry() {
        let request = LaunchArgs::default()
            .with_genes_dir("/data/genes")
            .with_pangenome_tool(PangenomeTool::Panaroo)
            .validate()
            .unwrap();
        let cmd = builder().build(&request, &conda());
        assert!(cmd.has_config_key(ConfigKey::GenesDir));
        assert!(!cmd.has_config_key(ConfigKey::Core));
    }

    #[test]
    fn build_is_deterministic() {
        let request = assemblies_request();
        let resolution = conda();
        let first = builder().build(&request, &resolution);
        let second = builder().build(&request, &resolution);
        assert_eq!(first, second);
        assert_eq!(first.display_line(), second.display_line());
    }

    #[test]
    fn paths_with_spaces_stay_single_tokens() {
        let request = LaunchArgs::default()
            .with_genes_dir("/data/my genes; echo hi")
            .validate()
            .unwrap();
        let cmd = builder().build(&request, &conda());
        assert_eq!(
            cmd.config_value(ConfigKey::GenesDir),
            Some("/data/my genes; echo hi")
        );
    }

    #[test]
    fn dot_segments_are_folded() {
        let request = LaunchArgs::default()
            .with_genes_dir("./genes")
            .with_outdir("../shared/./out/")
            .validate()
            .unwrap();
        let cmd = builder().build(&request, &conda());
        assert_eq!(
            cmd.config_value(ConfigKey::GenesDir),
            Some("/home/user/project/genes")
        );
        assert_eq!(
            cmd.config_value(ConfigKey::OutDir),
            Some("/home/user/shared/out")
        );
    }

    #[test]
    fn parent_of_root_stays_root() {
        let request = LaunchArgs::default()
            .with_genes_dir("/../data/genes")
            .validate()
            .unwrap();
        let cmd = builder().build(&request, &conda());
        assert_eq!(cmd.config_value(ConfigKey::GenesDir), Some("/data/genes"));
    }
}
