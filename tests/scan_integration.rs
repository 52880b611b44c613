use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestPlugins {
    root: PathBuf,
}

impl TestPlugins {
    fn new(prefix: &str) -> Self {
        let root = unique_temp_dir(prefix);
        let plugins = root.join("plugins");
        fs::create_dir_all(&plugins).expect("create plugins dir");

        write_plugin(&plugins, "core", "acme/core", &[]);
        write_plugin(
            &plugins,
            "widgets",
            "acme/widgets",
            &["php", "acme/core", "guzzlehttp/guzzle"],
        );
        fs::create_dir_all(plugins.join("assets")).expect("create folder without manifest");

        Self { root }
    }

    fn plugins(&self) -> PathBuf {
        self.root.join("plugins")
    }

    fn out(&self) -> PathBuf {
        self.root.join("out")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(plugdeps_bin())
            .env_remove("PLUGDEPS_DIR")
            .env_remove("PLUGDEPS_FORMAT")
            .env_remove("PLUGDEPS_OUTPUT")
            .env_remove("PLUGDEPS_CONFIG")
            .env_remove("PLUGDEPS_SHOW_EXTERNAL")
            .arg("--dir")
            .arg(self.plugins())
            .arg("--output")
            .arg(self.out())
            .arg("--no-color")
            .args(args)
            .output()
            .expect("run plugdeps")
    }
}

impl Drop for TestPlugins {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn write_plugin(root: &Path, folder: &str, name: &str, requires: &[&str]) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).expect("create plugin dir");
    let require = requires
        .iter()
        .map(|dep| format!("\"{dep}\": \"*\""))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        dir.join("composer.json"),
        format!("{{\"name\": \"{name}\", \"require\": {{{require}}}}}"),
    )
    .expect("write composer.json");
}

fn graphviz_available() -> bool {
    which::which("dot").is_ok()
}

fn plugdeps_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_plugdeps"))
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    let pid = std::process::id();
    std::env::temp_dir().join(format!("plugdeps-{prefix}-{pid}-{nanos}"))
}

fn assert_success(output: &Output) -> (String, String) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        output.status.success(),
        "plugdeps failed\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );
    (stdout, stderr)
}

#[test]
fn mermaid_without_externals_lists_internal_edges() {
    if !graphviz_available() {
        return;
    }
    let plugins = TestPlugins::new("scan-mermaid");
    let output = plugins.run(&["--format", "mermaid"]);
    let (stdout, stderr) = assert_success(&output);

    let mermaid =
        fs::read_to_string(plugins.out().join("dependencies.mmd")).expect("read mermaid output");
    assert_eq!(mermaid, "graph TD\n    \"widgets\" --> \"core\"\n");
    assert!(!plugins.out().join("dependencies.svg").exists());

    assert!(stderr.contains("no composer.json found in assets"), "stderr:\n{stderr}");
    assert!(stderr.contains("Mermaid graph saved to"), "stderr:\n{stderr}");
    assert!(stderr.contains("Scanned 2 package(s)"), "stderr:\n{stderr}");
    assert!(stdout.contains("widgets:\n  ├─ core\n"), "stdout:\n{stdout}");
    assert!(
        stdout.contains("External Dependencies Summary:\n  guzzlehttp/guzzle: used by 1 plugin(s)\n"),
        "stdout:\n{stdout}"
    );
}

#[test]
fn mermaid_with_externals_adds_external_edges() {
    if !graphviz_available() {
        return;
    }
    let plugins = TestPlugins::new("scan-mermaid-external");
    let output = plugins.run(&["--format", "mermaid", "--show-external"]);
    let (stdout, _) = assert_success(&output);

    let mermaid =
        fs::read_to_string(plugins.out().join("dependencies.mmd")).expect("read mermaid output");
    assert_eq!(
        mermaid,
        "graph TD\n    \"widgets\" --> \"core\"\n    \"widgets\" --> \"guzzlehttp/guzzle\"\n"
    );
    assert!(stdout.contains("  ├─ guzzlehttp/guzzle (external)\n"), "stdout:\n{stdout}");
}

#[test]
fn json_summary_is_machine_readable() {
    if !graphviz_available() {
        return;
    }
    let plugins = TestPlugins::new("scan-json");
    let output = plugins.run(&["--format", "mermaid", "--json", "--quiet"]);
    let (stdout, stderr) = assert_success(&output);

    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("parse json summary");
    assert_eq!(summary["packages"][0]["label"], "widgets");
    assert_eq!(summary["packages"][0]["name"], "acme/widgets");
    assert_eq!(summary["external"][0]["used_by"], 1);
    assert!(!stderr.contains("saved to"), "quiet should hide confirmations");
    assert!(!stderr.contains("Scanned"), "quiet should hide progress messages");
    assert!(stderr.contains("no composer.json found in assets"));
}

#[test]
fn missing_root_directory_is_fatal() {
    if !graphviz_available() {
        return;
    }
    let plugins = TestPlugins::new("scan-missing-root");
    fs::remove_dir_all(plugins.plugins()).expect("remove plugins dir");

    let output = plugins.run(&["--format", "mermaid"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read plugins directory"), "stderr:\n{stderr}");
}

#[test]
fn empty_dir_flag_is_fatal() {
    let output = Command::new(plugdeps_bin())
        .env_remove("PLUGDEPS_DIR")
        .env_remove("PLUGDEPS_CONFIG")
        .arg("--format")
        .arg("mermaid")
        .output()
        .expect("run plugdeps");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--dir"), "stderr:\n{stderr}");
}
