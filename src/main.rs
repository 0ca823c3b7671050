use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use twig::areas::repository::Repository;
use twig::commands::plumbing::cat_file::CatFileMode;
use twig::commands::porcelain::log::{DEFAULT_MAX_COUNT, LogOptions};
use twig::commands::porcelain::remote::RemoteAction;
use twig::commands::porcelain::reset::ResetMode;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    about = "A minimal version control engine",
    long_about = "twig keeps a content-addressed object store, a binary staging index \
    and branch refs in a `.git` directory, and offers the everyday add / commit / status \
    / diff / log / branch / checkout / reset workflow on top of them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short = 't', long = "type", default_value = "blob", help = "Object kind: blob, tree or commit")]
        object_type: String,
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the kind, size or content of an object",
        group(ArgGroup::new("mode").required(true).args(["pretty", "type_only", "size_only"]))
    )]
    CatFile {
        #[arg(short = 'p', long = "pretty", help = "Pretty-print the object")]
        pretty: bool,
        #[arg(short = 't', long = "type", help = "Print the object kind")]
        type_only: bool,
        #[arg(short = 's', long = "size", help = "Print the payload size")]
        size_only: bool,
        #[arg(index = 1, help = "Object id, prefix or revision")]
        object: String,
    },
    #[command(name = "ls-files", about = "List index entries")]
    LsFiles {
        #[arg(short, long, help = "Show mode and object id")]
        stage: bool,
    },
    #[command(name = "write-tree", about = "Write a tree object from the index")]
    WriteTree,
    #[command(name = "rev-parse", about = "Resolve a revision to a full object id")]
    RevParse {
        #[arg(index = 1, help = "Revision expression (HEAD, branch, short or full id)")]
        revision: String,
    },
    #[command(name = "add", about = "Add file contents to the index")]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(name = "rm", about = "Remove tracked files from the index and working tree")]
    Rm {
        #[arg(long, help = "Only remove from the index")]
        cached: bool,
        #[arg(required = true, help = "Tracked file or directory paths")]
        paths: Vec<String>,
    },
    #[command(
        name = "restore",
        about = "Restore index entries from HEAD, or working files from the index"
    )]
    Restore {
        #[arg(long, help = "Restore the index from HEAD")]
        staged: bool,
        #[arg(required = true, help = "Pathspecs to restore")]
        paths: Vec<String>,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "diff", about = "Show unstaged changes")]
    Diff,
    #[command(name = "commit", about = "Record the index as a new commit")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
        #[arg(long, help = "Replace the HEAD commit")]
        amend: bool,
    },
    #[command(name = "log", about = "Show commit history")]
    Log {
        #[arg(long, help = "Show one commit per line")]
        oneline: bool,
        #[arg(short = 'n', long = "max-count", default_value_t = DEFAULT_MAX_COUNT, help = "Limit the number of commits")]
        max_count: usize,
        #[arg(index = 1, help = "Revision to start from (defaults to HEAD)")]
        revision: Option<String>,
    },
    #[command(name = "branch", about = "List, create or delete branches")]
    Branch {
        #[arg(short, long, requires = "name", help = "Delete the branch")]
        delete: bool,
        #[arg(index = 1, help = "Branch name")]
        name: Option<String>,
        #[arg(index = 2, conflicts_with = "delete", help = "Revision to start the branch at")]
        start_point: Option<String>,
    },
    #[command(name = "checkout", about = "Switch branches or detach HEAD at a commit")]
    Checkout {
        #[arg(index = 1, help = "Branch name or revision")]
        target: String,
    },
    #[command(name = "reset", about = "Move HEAD to another commit")]
    Reset {
        #[arg(long, conflicts_with = "mixed", help = "Move HEAD only")]
        soft: bool,
        #[arg(long, help = "Move HEAD and reset the index to the target tree (default)")]
        mixed: bool,
        #[arg(index = 1, help = "Target revision")]
        revision: String,
    },
    #[command(name = "remote", about = "Manage remotes")]
    Remote {
        #[command(subcommand)]
        command: Option<RemoteCommands>,
    },
}

#[derive(Subcommand)]
enum RemoteCommands {
    #[command(name = "list", about = "List remotes")]
    List {
        #[arg(short, long, help = "Show remote URLs")]
        verbose: bool,
    },
    #[command(name = "add", about = "Add a remote")]
    Add { name: String, url: String },
    #[command(name = "remove", about = "Remove a remote")]
    Remove { name: String },
    #[command(name = "get-url", about = "Print the URL of a remote")]
    GetUrl { name: String },
}

impl From<RemoteCommands> for RemoteAction {
    fn from(command: RemoteCommands) -> Self {
        match command {
            RemoteCommands::List { verbose } => RemoteAction::List { verbose },
            RemoteCommands::Add { name, url } => RemoteAction::Add { name, url },
            RemoteCommands::Remove { name } => RemoteAction::Remove { name },
            RemoteCommands::GetUrl { name } => RemoteAction::GetUrl { name },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = std::io::stdout().flush();
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let path = pwd.join(Path::new(path.as_deref().unwrap_or(".")));
            Repository::new(&path, Box::new(std::io::stdout()))?.init()
        }
        command => run_in_repository(&pwd, command),
    }
}

fn run_in_repository(pwd: &Path, command: Commands) -> Result<()> {
    let repository = Repository::open(pwd, Box::new(std::io::stdout()))?;

    match command {
        Commands::Init { .. } => repository.init()?,
        Commands::HashObject {
            object_type,
            write,
            file,
        } => repository.hash_object(&file, &object_type, write)?,
        Commands::CatFile {
            type_only,
            size_only,
            object,
            ..
        } => {
            let mode = if type_only {
                CatFileMode::Type
            } else if size_only {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };
            repository.cat_file(&object, mode)?
        }
        Commands::LsFiles { stage } => repository.ls_files(stage)?,
        Commands::WriteTree => repository.write_tree()?,
        Commands::RevParse { revision } => repository.rev_parse(&revision)?,
        Commands::Add { paths } => repository.add(&paths)?,
        Commands::Rm { cached, paths } => repository.rm(&paths, cached)?,
        Commands::Restore { staged, paths } => repository.restore(&paths, staged)?,
        Commands::Status => repository.status()?,
        Commands::Diff => repository.diff()?,
        Commands::Commit { message, amend } => repository.commit(message.as_deref(), amend)?,
        Commands::Log {
            oneline,
            max_count,
            revision,
        } => repository.log(&LogOptions {
            oneline,
            max_count,
            revision,
        })?,
        Commands::Branch {
            delete,
            name,
            start_point,
        } => match name {
            Some(name) if delete => repository.delete_branch(&name)?,
            Some(name) => repository.create_branch(&name, start_point.as_deref())?,
            None => repository.list_branches()?,
        },
        Commands::Checkout { target } => repository.checkout(&target)?,
        Commands::Reset {
            soft, revision, ..
        } => {
            let mode = if soft {
                ResetMode::Soft
            } else {
                ResetMode::Mixed
            };
            repository.reset(&revision, mode)?
        }
        Commands::Remote { command } => {
            let action = command
                .map(RemoteAction::from)
                .unwrap_or(RemoteAction::List { verbose: false });
            repository.remote(&action)?
        }
    }

    repository.writer().flush()?;

    Ok(())
}
