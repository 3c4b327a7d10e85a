use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Embed the short git hash and commit date for `--version` identification.
/// Both default to "unknown" when git is unavailable or this is not a
/// repository, so the env vars are always defined.
fn embed_build_info() {
  println!("cargo:rustc-env=GIT_HASH={}", git_stdout(&["rev-parse", "--short", "HEAD"]));
  println!("cargo:rustc-env=GIT_DATE={}", git_stdout(&["log", "-1", "--format=%cs"]));
}

fn git_stdout(args: &[&str]) -> String {
  let value = Command::new("git")
    .args(args)
    .output()
    .ok()
    .filter(|output| output.status.success())
    .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
    .unwrap_or_default();

  if value.is_empty() { "unknown".to_string() } else { value }
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
