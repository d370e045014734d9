//! Command dispatch for the three extension commands.

use std::path::PathBuf;

use subnoto_application::{
    ApplicationError, ListEnvelopes, ListEnvelopesInput, ListWorkspaces, PreferencesProvider,
    UploadDocument, UploadDocumentInput,
};
use subnoto_domain::Preferences;
use subnoto_infrastructure::{
    FilePreferencesRepository, SubnotoClientFactory, SystemUrlOpener, TokioFileSystem,
};
use subnoto_ui::{EnvelopeListState, UploadFormState, WorkspaceListState};

const USAGE: &str = "\
Usage: subnoto <command>

Commands:
  workspaces                                List your Subnoto workspaces
  envelopes [--workspace <uuid>] [--all]    List envelopes, optionally filtered
  upload <file> [--title <t>] [--workspace <uuid>]
                                            Upload a document as a new envelope
";

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatches one command invocation.
///
/// # Errors
///
/// Returns the user-facing error of the failing step; the process exit
/// code is derived from it.
pub async fn run(args: &[String]) -> CommandResult {
    match args.first().map(String::as_str) {
        Some("workspaces") => list_workspaces().await,
        Some("envelopes") => list_envelopes(&args[1..]).await,
        Some("upload") => upload(&args[1..]).await,
        _ => {
            eprint!("{USAGE}");
            Err("missing or unknown command".into())
        }
    }
}

fn preferences() -> Result<Preferences, ApplicationError> {
    Ok(FilePreferencesRepository::new().preferences()?)
}

fn factory() -> SubnotoClientFactory {
    SubnotoClientFactory::new(assets_dir())
}

/// Bundled assets directory: `SUBNOTO_ASSETS_DIR` if set, otherwise
/// `assets/` next to the executable.
fn assets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("SUBNOTO_ASSETS_DIR") {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}

async fn list_workspaces() -> CommandResult {
    let prefs = preferences()?;
    let use_case = ListWorkspaces::new(factory());

    let mut state = WorkspaceListState::new();
    state.begin_load();
    state.finish_load(use_case.execute(&prefs).await);

    if let Some(message) = state.error() {
        return Err(message.to_string().into());
    }
    let rows = state.rows();
    if rows.is_empty() {
        let (title, description) = state.empty_view();
        println!("{title}: {description}");
        return Ok(());
    }
    for row in rows {
        println!("{}  {}  ({})", row.title, row.subtitle, row.uuid);
    }
    Ok(())
}

async fn list_envelopes(args: &[String]) -> CommandResult {
    let filter = flag_value(args, "--workspace");
    let fetch_all = args.iter().any(|a| a == "--all");

    let prefs = preferences()?;
    let workspaces = ListWorkspaces::new(factory());
    let envelopes = ListEnvelopes::new(factory());

    let mut state = EnvelopeListState::new();

    // Dropdown load; a failure here degrades to an unnamed filter.
    state.begin_workspaces_load();
    state.finish_workspaces_load(workspaces.execute(&prefs).await);

    let ticket = state.set_filter(filter.unwrap_or_default());
    let input = ListEnvelopesInput {
        workspace_filter: state.workspace_filter().map(String::from),
        page: 1,
    };
    state.finish_load(ticket, envelopes.execute(&prefs, input).await);

    if fetch_all {
        while let Some((ticket, page)) = state.begin_load_more() {
            let input = ListEnvelopesInput {
                workspace_filter: state.workspace_filter().map(String::from),
                page,
            };
            state.finish_load_more(ticket, envelopes.execute(&prefs, input).await);
        }
    }

    if let Some(message) = state.error() {
        return Err(message.to_string().into());
    }
    let rows = state.rows();
    if rows.is_empty() {
        let (title, description) = state.empty_view();
        println!("{title}: {description}");
        return Ok(());
    }
    for row in &rows {
        println!(
            "{}  [{}]  {}  {}  ({})",
            row.title, row.subtitle, row.updated, row.signatures, row.uuid
        );
    }
    if state.has_more() {
        println!("... more envelopes available, rerun with --all");
    }
    Ok(())
}

async fn upload(args: &[String]) -> CommandResult {
    let file = positional(args).map(PathBuf::from);
    let title = flag_value(args, "--title");
    let workspace = flag_value(args, "--workspace");

    let prefs = preferences()?;
    let use_case = UploadDocument::new(factory(), TokioFileSystem::new(), SystemUrlOpener::new());

    let mut state = UploadFormState::new();
    if !state.begin_submit() {
        return Ok(());
    }
    let result = use_case
        .execute(
            &prefs,
            UploadDocumentInput {
                file_path: file,
                title,
                workspace_uuid: workspace,
            },
        )
        .await;
    state.finish_submit();

    let output = result?;
    println!("Document uploaded: envelope {}", output.envelope_uuid);
    println!("Opening {}", output.edit_url);
    Ok(())
}

/// Returns the value following `flag`, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Returns the first argument that is neither a flag nor a flag value.
fn positional(args: &[String]) -> Option<&str> {
    let mut index = 0;
    while index < args.len() {
        let arg = &args[index];
        if arg == "--title" || arg == "--workspace" {
            index += 2;
        } else if arg.starts_with("--") {
            index += 1;
        } else {
            return Some(arg);
        }
    }
    None
}
