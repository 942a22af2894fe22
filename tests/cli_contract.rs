//! End-to-end tests of the stdout / exit code contract
//!
//! Drives the built binary with piped stdin, the way a launcher script would
//! capture it with `$(mode-selector ...)`.

use std::ffi::OsStr;
use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const IDENTIFIERS: &[&str] = &[
    "terminal-only",
    "terminal-tmux",
    "tmux-session",
    "tmux-nvim",
    "tmux-nvim-claude",
];

fn selector<S: AsRef<OsStr>>(args: &[S], stdin: &str) -> Output {
    let config_dir = TempDir::new().expect("temp dir");

    let mut child = Command::new(env!("CARGO_BIN_EXE_mode-selector"))
        .args(args)
        .env("MODE_SELECTOR_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("MODE_SELECTOR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Should spawn mode-selector");

    // A closed pipe is fine: some runs never read stdin
    let _ = child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes());

    child.wait_with_output().expect("Should finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_contract(output: &Output) {
    let out = stdout(output);
    let code = output.status.code().expect("exit code");

    if out.is_empty() {
        assert_eq!(code, 1, "empty stdout must mean exit 1");
    } else {
        assert_eq!(code, 0, "stdout {:?} must mean exit 0", out);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1, "exactly one line, got {:?}", out);
        assert!(IDENTIFIERS.contains(&lines[0]), "unknown token {:?}", lines[0]);
    }
}

#[test]
fn test_fourth_entry_without_argument() {
    let output = selector::<&str>(&[], "4\n");
    assert_eq!(stdout(&output), "tmux-nvim\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_cancel_with_project_path() {
    let output = selector(&["/Users/x/proj"], "q\n");
    assert_eq!(stdout(&output), "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Project: /Users/x/proj"));
}

#[test]
fn test_first_and_fifth_entries() {
    let output = selector::<&str>(&[], "1\n");
    assert_eq!(stdout(&output), "terminal-only\n");
    assert_eq!(output.status.code(), Some(0));

    let output = selector(&["/tmp"], "5\n");
    assert_eq!(stdout(&output), "tmux-nvim-claude\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_invalid_index_behaves_like_cancel() {
    let invalid = selector::<&str>(&[], "99\n");
    let cancelled = selector::<&str>(&[], "q\n");

    assert_eq!(stdout(&invalid), "");
    assert_eq!(invalid.status.code(), Some(1));
    assert_eq!(stdout(&invalid), stdout(&cancelled));
    assert_eq!(invalid.status.code(), cancelled.status.code());
}

#[test]
fn test_closed_stdin_cancels() {
    let output = selector(&["/Users/x/proj"], "");
    assert_eq!(stdout(&output), "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_typed_identifier() {
    let output = selector::<&str>(&[], "tmux-session\n");
    assert_eq!(stdout(&output), "tmux-session\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_menu_goes_to_stderr_in_order() {
    let output = selector::<&str>(&[], "q\n");
    let menu = stderr(&output);

    let positions: Vec<usize> = [
        "Terminal (Ghostty)",
        "Terminal + Tmux",
        "Tmux Session",
        "Tmux + Neovim",
        "Tmux + Neovim + Claude Code",
    ]
    .iter()
    .map(|title| menu.find(title).expect("title on stderr"))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(!menu.contains("Project:"));
}

#[test]
fn test_preselected_mode() {
    let output = selector(&["--mode", "terminal-tmux", "/Users/x/proj"], "");
    assert_eq!(stdout(&output), "terminal-tmux\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());

    let output = selector(&["--mode", "emacs"], "");
    assert_eq!(stdout(&output), "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_and_bad_arguments_keep_stdout_empty() {
    for args in [&["--help"][..], &["--version"][..], &["--bogus"][..], &["a", "b"][..]] {
        let output = selector(args, "");
        assert_eq!(stdout(&output), "", "args {:?}", args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(!stderr(&output).is_empty());
    }
}

#[test]
fn test_project_path_starting_with_dash() {
    let output = selector(&["-odd-dir"], "1\n");
    assert_eq!(stdout(&output), "terminal-only\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Project: -odd-dir"));

    // Known flags still win over the hyphen-friendly positional
    let output = selector(&["-m", "tmux-nvim", "-odd-dir"], "");
    assert_eq!(stdout(&output), "tmux-nvim\n");
    assert_eq!(output.status.code(), Some(0));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_project_path_still_shows_menu() {
    use std::os::unix::ffi::OsStrExt;

    let path = OsStr::from_bytes(b"/Users/x/caf\xe9");
    let output = selector(&[path], "3\n");
    assert_eq!(stdout(&output), "tmux-session\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Project: /Users/x/caf"));
}

#[cfg(unix)]
#[test]
fn test_termination_signals_cancel() {
    for signal in ["INT", "TERM", "HUP"] {
        let config_dir = TempDir::new().unwrap();
        let mut child = Command::new(env!("CARGO_BIN_EXE_mode-selector"))
            .arg("/Users/x/proj")
            .env("MODE_SELECTOR_CONFIG", config_dir.path().join("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("MODE_SELECTOR_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        // Wait for the prompt so the handler is in place
        let mut menu_stream = child.stderr.take().unwrap();
        let mut menu = Vec::new();
        let mut chunk = [0u8; 256];
        while !String::from_utf8_lossy(&menu).contains("q to cancel]: ") {
            let n = menu_stream.read(&mut chunk).unwrap();
            assert!(n > 0, "SIG{}: stderr closed before the prompt", signal);
            menu.extend_from_slice(&chunk[..n]);
        }

        let sent = Command::new("kill")
            .args(["-s", signal, &child.id().to_string()])
            .status()
            .unwrap();
        assert!(sent.success());

        let status = child.wait().unwrap();
        let mut out = String::new();
        child.stdout.take().unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "", "SIG{}", signal);
        assert_eq!(status.code(), Some(1), "SIG{}", signal);
    }
}

#[test]
fn test_config_header_and_broken_config() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.toml");
    std::fs::write(&good, "header = \"Open project how?\"\ncolor = \"always\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mode-selector"))
        .env("MODE_SELECTOR_CONFIG", &good)
        .env("NO_COLOR", "1")
        .env_remove("MODE_SELECTOR_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Open project how?"));
    assert_eq!(output.status.code(), Some(1));

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "header = [").unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_mode-selector"))
        .env("MODE_SELECTOR_CONFIG", &broken)
        .env_remove("MODE_SELECTOR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"2\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "terminal-tmux\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_every_run_honours_contract() {
    let inputs = [
        "", "\n", "0\n", "1\n", "2\n", "3\n", "4\n", "5\n", "6\n", "99\n", "q\n", "junk\n",
        "tmux-nvim\n", "TMUX-NVIM\n",
    ];
    for input in inputs {
        assert_contract(&selector::<&str>(&[], input));
        assert_contract(&selector(&["/Users/x/proj"], input));
    }
}
