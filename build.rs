use std::path::PathBuf;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=GRIDPAINT_GIT_HASH={hash}");

    let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) else {
        return;
    };
    ["HEAD", "refs", "packed-refs"]
        .iter()
        .map(|entry| git_dir.join(entry))
        .filter(|path| path.exists())
        .for_each(|path| println!("cargo:rerun-if-changed={}", path.display()));
}
