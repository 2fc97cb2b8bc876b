use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with an isolated environment.
///
/// `HOME` and the XDG dirs point at `home` so no real config file is read,
/// and every `READERCTL_*` variable from the outer environment is cleared.
pub fn run_cli(args: &[&str], home: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readerctl"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    for var in [
        "READERCTL_API_TOKEN",
        "READERCTL_CONFIG",
        "READERCTL_BASE_URL",
        "READERCTL_DEBUG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so a mock server can keep answering.
pub async fn run_cli_async(args: &[&str], home: &Path, envs: &[(&str, &str)]) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let envs: Vec<(String, String)> = envs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let home = home.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let envs: Vec<(&str, &str)> = envs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        run_cli(&args, &home, &envs)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
