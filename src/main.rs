use anyhow::Result;
use clap::Parser;

use release_branches::config;
use release_branches::event;
use release_branches::git::Git2Repository;
use release_branches::host::{GithubReleases, ReleaseHost};
use release_branches::reconcile::{run_reconciliation, run_release_event, ReconcileOptions};
use release_branches::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-branches",
    about = "Keep release/vN branches consistent with semantic-version tags"
)]
struct Args {
    #[arg(help = "Path to the git repository", default_value = ".")]
    repo: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Push created branches to the remote")]
    push: bool,

    #[arg(long, value_name = "N", help = "Skip majors below this floor")]
    min_major: Option<u64>,

    #[arg(
        long,
        value_name = "PATH",
        help = "React to a single release event read from this context file"
    )]
    event_file: Option<String>,

    #[arg(long, help = "Remote name (overrides configuration)")]
    remote: Option<String>,

    #[arg(
        long,
        help = "API token for hosted release sync (falls back to GITHUB_TOKEN)"
    )]
    token: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-branches {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration; CLI flags override file values
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let remote = args.remote.unwrap_or_else(|| config.remote.clone());
    let options = ReconcileOptions {
        push: args.push || config.push,
        min_major: args.min_major.or(config.min_major),
        dry_run: args.dry_run,
    };

    // Initialize the version-control backend
    let repo = match Git2Repository::open_with_remote(&args.repo, &remote) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Single-release mode reads the triggering event from a context file
    let context = match args.event_file.as_deref() {
        Some(path) => match event::load_context(path) {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => None,
    };

    // Hosted-release sync needs a token and the repository's full name
    let host = build_host(&args.token, &config, context.as_ref(), &options);

    let outcome = match &context {
        Some(ctx) => {
            ui::display_status(&format!(
                "Handling '{}' event for '{}'",
                ctx.event_name, ctx.payload.repository.full_name
            ));
            run_release_event(&repo, host.as_deref(), ctx, &options)
        }
        None => {
            ui::display_status("Reconciling release branches against all tags");
            run_reconciliation(&repo, host.as_deref(), &options)
        }
    };

    ui::display_outcome(&outcome);

    if !outcome.succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn build_host(
    token_arg: &Option<String>,
    config: &config::Config,
    context: Option<&event::GithubContext>,
    options: &ReconcileOptions,
) -> Option<Box<dyn ReleaseHost>> {
    if !config.release_sync || !options.push {
        return None;
    }

    let token = token_arg
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let repository = config.repository.clone().or_else(|| {
        context
            .map(|ctx| ctx.payload.repository.full_name.clone())
            .filter(|name| !name.is_empty())
    });

    match (token, repository) {
        (Some(token), Some(repository)) => {
            let host: Box<dyn ReleaseHost> = Box::new(GithubReleases::new(token, repository));
            Some(host)
        }
        _ => {
            ui::display_status(
                "Release sync enabled but no token or repository available; skipping sync",
            );
            None
        }
    }
}
