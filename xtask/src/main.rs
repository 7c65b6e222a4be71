//! Workspace maintenance and developer workflow commands (`cargo xtask`).
//!
//! The `xtask` binary wraps web setup, bundle builds and verification so the repository can expose
//! stable entrypoints through Cargo aliases.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

const SITE_CARGO_FEATURE: &str = "csr";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const RELEASE_DIST_DIR: &str = "target/trunk-dist";
const SITE_PUBLIC_URL: &str = "/ryanhomepage/";

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "setup-web" => setup_web(&root),
        "build-web" => build_web(&root, rest),
        "check-web" => check_web(&root),
        "verify" => verify(&root, rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web           Install wasm target and trunk (if missing)\n\
           build-web [args]    Build the static web bundle with trunk (release, served under /ryanhomepage/)\n\
           check-web           Run site compile checks (CSR native + wasm)\n\
           verify [fast|full]  Format check, clippy and tests (default: full)\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(root, "rustup", vec!["target", "add", WASM_TARGET])?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command(
        "trunk",
        "Install it with `cargo xtask setup-web` (or `cargo install trunk`)",
    )?;
    run_trunk(site_dir(root), trunk_build_args(args))
}

fn trunk_build_args(args: Vec<String>) -> Vec<String> {
    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
    ];
    if !args_specify_dist(&args) {
        trunk_args.push("--dist".to_string());
        trunk_args.push(RELEASE_DIST_DIR.to_string());
    }
    if !args_specify_flag(&args, "--public-url") {
        trunk_args.push("--public-url".to_string());
        trunk_args.push(SITE_PUBLIC_URL.to_string());
    }
    trunk_args.extend(args);
    trunk_args
}

fn check_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec!["check", "-p", "site", "--features", SITE_CARGO_FEATURE],
    )?;

    if wasm_target_installed() {
        check_site_wasm(root)
    } else {
        eprintln!(
            "warn: {WASM_TARGET} target not installed; skipping wasm check (run `cargo xtask setup-web`)"
        );
        Ok(())
    }
}

fn check_site_wasm(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec![
            "check",
            "-p",
            "site",
            "--target",
            WASM_TARGET,
            "--features",
            SITE_CARGO_FEATURE,
        ],
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VerifyMode {
    Fast,
    Full,
}

fn parse_verify_mode(args: &[String]) -> Result<VerifyMode, String> {
    match args.first().map(String::as_str).unwrap_or("full") {
        "fast" => Ok(VerifyMode::Fast),
        "full" => Ok(VerifyMode::Full),
        other => Err(format!(
            "invalid verify mode `{other}` (expected `fast` or `full`)"
        )),
    }
}

fn verify(root: &Path, args: Vec<String>) -> Result<(), String> {
    let mode = parse_verify_mode(&args)?;

    run(root, "cargo", vec!["fmt", "--all", "--", "--check"])?;
    run(
        root,
        "cargo",
        vec![
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    run(root, "cargo", vec!["test", "--workspace"])?;

    if mode == VerifyMode::Full {
        if !wasm_target_installed() {
            return Err(format!(
                "{WASM_TARGET} target not installed; run `cargo xtask setup-web` or use `verify fast`"
            ));
        }
        check_site_wasm(root)?;
    }

    println!("verify ({mode:?}) passed");
    Ok(())
}

fn args_specify_dist(args: &[String]) -> bool {
    args_specify_flag(args, "--dist")
}

fn args_specify_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| {
        arg == flag
            || arg
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='))
    })
}

fn wasm_target_installed() -> bool {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
    else {
        return false;
    };

    if !output.status.success() {
        return false;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .any(|line| line.trim() == WASM_TARGET)
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn ensure_command(program: &str, hint: &str) -> Result<(), String> {
    if command_available(program) {
        Ok(())
    } else {
        Err(format!("required command `{program}` not found. {hint}"))
    }
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned = args.into_iter().map(ToString::to_string).collect();
    run_owned(root, program, owned)
}

fn run_owned(root: &Path, program: &str, args: Vec<String>) -> Result<(), String> {
    print_command(program, &args);
    let status = Command::new(program)
        .current_dir(root)
        .args(&args)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn run_trunk(cwd: PathBuf, args: Vec<String>) -> Result<(), String> {
    print_command("trunk", &args);
    let mut cmd = Command::new("trunk");
    cmd.current_dir(cwd).args(&args);

    // Some environments export NO_COLOR=1, but trunk expects "true"/"false".
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`trunk` exited with status {status}"))
    }
}

fn site_dir(root: &Path) -> PathBuf {
    root.join("crates/site")
}

fn print_command(program: &str, args: &[String]) {
    if args.is_empty() {
        println!("+ {program}");
        return;
    }

    println!("+ {program} {}", args.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_defaults_to_full_and_rejects_unknown_modes() {
        assert_eq!(parse_verify_mode(&[]), Ok(VerifyMode::Full));
        assert_eq!(parse_verify_mode(&["fast".into()]), Ok(VerifyMode::Fast));
        assert!(parse_verify_mode(&["quick".into()]).is_err());
    }

    #[test]
    fn release_build_adds_dist_and_public_url_only_when_missing() {
        let args = trunk_build_args(Vec::new());
        assert_eq!(
            args,
            vec![
                "build",
                "index.html",
                "--release",
                "--dist",
                RELEASE_DIST_DIR,
                "--public-url",
                SITE_PUBLIC_URL
            ]
        );

        let custom = trunk_build_args(vec!["--dist=out".into(), "--public-url=/".into()]);
        assert_eq!(
            custom,
            vec!["build", "index.html", "--release", "--dist=out", "--public-url=/"]
        );
    }

    #[test]
    fn dist_detection_handles_split_and_inline_forms() {
        assert!(args_specify_dist(&["--dist".into(), "x".into()]));
        assert!(args_specify_dist(&["--dist=target/custom".into()]));
        assert!(!args_specify_dist(&["--release".into()]));
        assert!(!args_specify_dist(&["--distance".into()]));
    }

    #[test]
    fn workspace_root_contains_the_site_crate() {
        assert!(site_dir(&workspace_root()).ends_with("crates/site"));
    }
}
