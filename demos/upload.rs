#[macro_use]
extern crate log;

use std::path::PathBuf;

use argh::FromArgs;

use smbfiles::{copy_with, CopyOptions, CopyOutcome};
#[cfg(target_family = "windows")]
use smbfiles::{SmbCredentials, SmbShare};
#[cfg(target_family = "unix")]
use smbfiles::{SmbCredentials, SmbOptions, SmbShare};

#[derive(FromArgs)]
#[argh(description = "
where positional can be: [smb://address[:port]] <local file> <remote path>

remote path is relative to the share and uses backslash as separator (e.g. reports\\2024\\q1.pdf)")]
struct Args {
    #[argh(option, short = 'P', description = "specify password")]
    password: Option<String>,
    #[cfg(target_family = "windows")]
    #[argh(option, short = 'u', description = "specify username")]
    username: Option<String>,
    #[cfg(target_family = "unix")]
    #[argh(option, short = 'u', description = "specify username")]
    username: String,
    #[cfg(target_family = "unix")]
    #[argh(
        option,
        short = 'w',
        default = r#""WORKGROUP".to_string()"#,
        description = "specify workgroup"
    )]
    workgroup: String,
    #[argh(option, short = 's', description = "specify share")]
    share: String,
    #[argh(switch, description = "replace the remote file if it exists")]
    overwrite: bool,
    #[argh(switch, description = "fail instead of skipping when the local file can't be uploaded")]
    strict: bool,
    #[argh(switch, description = "create the missing remote directories")]
    parents: bool,
    #[argh(
        positional,
        description = "smb://address[:port] on UNIX and server name on Windows"
    )]
    server: String,
    #[argh(positional, description = "local file to upload")]
    source: PathBuf,
    #[argh(positional, description = "remote destination path")]
    dest: String,
}

fn main() -> anyhow::Result<()> {
    assert!(env_logger::builder().try_init().is_ok());
    let args: Args = argh::from_env();
    #[cfg(target_family = "unix")]
    let password = match &args.password {
        Some(p) => p.clone(),
        None => read_secret_from_tty("Password: ")?,
    };

    let options = CopyOptions::default()
        .overwrite(args.overwrite)
        .strict(args.strict)
        .create_parents(args.parents);
    let source = args.source.clone();
    let dest = args.dest.clone();

    #[cfg(target_family = "unix")]
    let mut share = init_share(args, password)?;
    #[cfg(target_family = "windows")]
    let mut share = init_share(args);

    info!("connecting to server...");
    share.connect()?;
    info!("share connected");

    match copy_with(Some(source.as_path()), &mut share, Some(dest.as_str()), &options)? {
        CopyOutcome::Written(bytes) => println!("{} -> {}: {} bytes", source.display(), dest, bytes),
        CopyOutcome::Skipped(reason) => println!("{} skipped: {}", source.display(), reason),
    }

    Ok(())
}

#[cfg(target_family = "windows")]
fn init_share(args: Args) -> SmbShare {
    info!(
        "initializing share {} on server {}",
        args.share, args.server
    );
    let mut credentials = SmbCredentials::new(args.server, args.share);
    if let Some(username) = args.username {
        credentials = credentials.username(username);
    }
    if let Some(password) = args.password {
        credentials = credentials.password(password);
    }
    SmbShare::new(credentials)
}

#[cfg(target_family = "unix")]
fn init_share(args: Args, password: String) -> anyhow::Result<SmbShare> {
    info!(
        "initializing share {} on server {}, with username {} and workgroup {}",
        args.share, args.server, args.username, args.workgroup
    );
    let share = SmbShare::try_new(
        SmbCredentials::default()
            .server(args.server)
            .share(args.share)
            .username(args.username)
            .password(password)
            .workgroup(args.workgroup),
        SmbOptions::default()
            .one_share_per_server(true)
            .case_sensitive(false),
    )?;

    Ok(share)
}

#[cfg(target_family = "unix")]
/// Read a secret from tty with customisable prompt
fn read_secret_from_tty(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}
