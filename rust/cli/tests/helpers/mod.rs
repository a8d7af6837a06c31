//! Shared harness for the CLI integration tests.
//!
//! `CliRunner` spawns the built `maketen` binary inside a private temp
//! directory with every `MAKETEN_*` variable cleared, so tests never see the
//! developer's configuration.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const CONFIG_VARS: &[&str] = &[
    "MAKETEN_CONFIG",
    "MAKETEN_SEED",
    "MAKETEN_MATCH_SETTLE_MS",
    "MAKETEN_MISMATCH_SETTLE_MS",
    "MAKETEN_PICKER",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_maketen")),
            temp_dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> String {
        self.dir().join(name).to_string_lossy().into_owned()
    }

    pub fn write_file(&self, name: &str, content: &[u8]) -> String {
        let path = self.dir().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path.to_string_lossy().into_owned()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    pub fn run_with_env_and_input(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &str,
    ) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.dir())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in CONFIG_VARS {
            cmd.env_remove(key);
        }
        cmd.env_remove("RUST_LOG");
        for (k, v) in env {
            cmd.env(k, v);
        }

        let mut child = cmd.spawn().expect("spawn maketen");
        if let Some(text) = input {
            let mut stdin = child.stdin.take().expect("stdin");
            stdin.write_all(text.as_bytes()).expect("write stdin");
        }
        let output = child.wait_with_output().expect("wait maketen");
        CliResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Card positions (1-based) that pair every expression with a ten, in deal order.
#[allow(dead_code)]
pub fn solving_input(seed: u64) -> String {
    use maketen_engine::cards::CardKind;
    use maketen_engine::engine::MatchEngine;
    use maketen_engine::game::RoundConfig;

    let engine = MatchEngine::new(RoundConfig::default(), Some(seed)).expect("engine");
    let cards = engine.state().deck().cards();
    let exprs = cards.iter().enumerate().filter(|(_, c)| c.kind == CardKind::Expression);
    let tens = cards.iter().enumerate().filter(|(_, c)| c.kind == CardKind::Ten);
    exprs
        .zip(tens)
        .map(|((e, _), (t, _))| format!("{}\n{}\n", e + 1, t + 1))
        .collect()
}
