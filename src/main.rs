use anyhow::Context;
use clap::Parser;
use kikstart_schematics::schematic::{self, Options};
use kikstart_schematics::tasks::TaskQueue;
use kikstart_schematics::tree::DiskTree;
use kikstart_schematics::util::init_logging;
use kikstart_schematics::workspace::WorkspaceConfig;
use std::path::PathBuf;
use tracing::info;

/// Add the kikstart themes package to a front-end workspace.
#[derive(Parser, Debug)]
#[command(name = "ng-add-themes", version)]
struct Cli {
    /// Workspace root directory
    #[arg(default_value = ".")]
    workspace: PathBuf,

    /// Project to operate on (defaults to the workspace default project)
    #[arg(long)]
    project: Option<String>,

    /// Theme variant to import
    #[arg(long)]
    theme: String,

    /// Do not schedule the dependency install
    #[arg(long)]
    skip_install: bool,

    /// Apply tree edits but print pending install tasks instead of running them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let options = Options {
        project: cli.project,
        theme: cli.theme,
        skip_install: cli.skip_install,
    };

    let mut tree = DiskTree::new(&cli.workspace);
    let workspace = WorkspaceConfig::load(&tree).context("reading workspace config")?;
    let config = workspace
        .resolve_project(options.project.as_deref())
        .context("resolving project")?
        .clone();

    let mut queue = TaskQueue::new();
    schematic::run(&mut tree, &config, &mut queue, &options)?;

    if cli.dry_run {
        for task in queue.tasks() {
            info!(working_dir = %task.working_dir.display(), "Pending install task (dry run)");
        }
    } else {
        queue
            .run_all(tree.root())
            .context("running install tasks")?;
    }

    info!(theme = options.theme, "Themes add-on applied");
    Ok(())
}
