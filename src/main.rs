use branch_flow::commands::*;
use branch_flow::core::{print_error, BranchFlowError, Result};
use clap::{Parser, Subcommand};
use std::env;

#[derive(Parser)]
#[command(name = "branch-flow")]
#[command(about = "Branch-flow orchestration for git: feature branches, merge requests, release tags")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a feature branch from the remote master and check it out
    Start {
        /// Name of the branch to create
        branch: String,
    },
    /// Push the current branch and tags to origin
    Push {
        /// First push of a new branch: also set upstream tracking
        #[arg(long)]
        new: bool,
    },
    /// Fetch from origin and report refs deleted on the remote
    Fetch,
    /// Pull the current branch from origin
    Pull,
    /// Create an annotated release tag with the configured prefix
    Tag {
        /// Tag name (the configured prefix is prepended)
        name: String,
        /// Tag message
        #[arg(short = 'm', long)]
        message: String,
    },
    /// List all tags
    Tags,
    /// Delete a local branch, optionally its remote counterpart too
    Delete {
        /// Branch to delete
        branch: String,
        /// Also delete the branch on origin
        #[arg(long)]
        remote: bool,
    },
    /// Merge the current branch into the configured test branch
    MergeRequest,
    /// Show the tip commit of a remote branch
    LastCommit {
        /// Remote branch name (without the origin/ prefix)
        branch: String,
    },
    /// Write a default .branch-flow.json into the repository
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let outcome = match cli.command {
        Commands::Start { branch } => execute_start(&branch),
        Commands::Push { new } => execute_push(new),
        Commands::Fetch => execute_fetch(),
        Commands::Pull => execute_pull(),
        Commands::Tag { name, message } => execute_tag(&name, &message),
        Commands::Tags => execute_tag_list(),
        Commands::Delete { branch, remote } => execute_delete(&branch, remote),
        Commands::MergeRequest => execute_merge_request(),
        Commands::LastCommit { branch } => execute_last_commit(&branch),
        Commands::Init => execute_init(),
    };

    if let Err(e) = outcome {
        match e {
            BranchFlowError::NoActiveRepository => print_error("Not in a git repository"),
            BranchFlowError::NoRemoteConfigured => {
                print_error("No remote configured; add an 'origin' remote first")
            }
            _ => print_error(&e.to_string()),
        }
        std::process::exit(1);
    }

    Ok(())
}
