use std::env;
use std::process::Command;

fn main() {
    build_ver();
}

fn build_ver() {
    let cargo_ver = env::var("CARGO_PKG_VERSION").unwrap();
    let version = git_ver().unwrap_or(format!("{} (unknown commit)", cargo_ver));

    println!("cargo:rustc-env=PASTELINK_VERSION={}", version.trim());
    println!(
        "cargo:rustc-env=PASTELINK_PROFILE={}",
        env::var("PROFILE").unwrap()
    );
}

fn git_ver() -> Option<String> {
    github_ver().or_else(git_cmd_ver)
}

fn git_cmd_ver() -> Option<String> {
    let mut git_cmd = Command::new("git");
    git_cmd.args(["describe", "--tags"]);

    match git_cmd.output() {
        Ok(output) if output.status.success() => {
            println!("cargo:rerun-if-changed=.git/HEAD");
            String::from_utf8(output.stdout).ok()
        }
        _ => None,
    }
}

fn github_ver() -> Option<String> {
    if let Ok(sha1) = env::var("GITHUB_SHA") {
        println!("cargo:rerun-if-env-changed=GITHUB_SHA");
        Some(sha1)
    } else {
        None
    }
}
