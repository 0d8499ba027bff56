// ABOUTME: Spawns the wizard binary inside a PTY, optionally mirrored in a visible terminal

use rexpect::session::{spawn_command, PtySession};
use std::path::Path;
use std::process::Command;

const BINARY: &str = "target/debug/autopilot-onboard";

/// Spawn the wizard and also open it in a separate terminal window to watch
pub fn spawn_app_visual(home: &Path) -> Result<PtySession, rexpect::error::Error> {
    #[cfg(feature = "visual-debug")]
    {
        let current_dir = std::env::current_dir().map_err(rexpect::error::Error::Io)?;
        open_terminal(&format!("cd {} && ./{}", current_dir.display(), BINARY));

        // Give terminal time to open
        std::thread::sleep(std::time::Duration::from_secs(2));
        println!("🖥️  Visual debug mode: Terminal window opened");
    }

    spawn_app_silent(home)
}

/// Spawn the wizard headless with an isolated HOME so config and logs stay in `home`
pub fn spawn_app_silent(home: &Path) -> Result<PtySession, rexpect::error::Error> {
    let mut cmd = if Path::new(BINARY).exists() {
        Command::new(BINARY)
    } else {
        let mut c = Command::new("cargo");
        c.arg("run").arg("--quiet").arg("--");
        c
    };

    cmd.env("HOME", home);
    cmd.env("RUST_LOG", "error");
    cmd.env("NO_COLOR", "1");

    spawn_command(cmd, Some(15000))
}

// Platform-specific terminal launchers
#[cfg(target_os = "macos")]
pub fn open_terminal(command: &str) {
    let script = format!(
        r#"
        tell application "Terminal"
            do script "{}"
            activate
        end tell
        "#,
        command
    );

    let _ = Command::new("osascript").arg("-e").arg(&script).spawn();
}

#[cfg(target_os = "linux")]
pub fn open_terminal(command: &str) {
    let terminals = [
        ("xterm", vec!["-e", command]),
        ("gnome-terminal", vec!["--", command]),
        ("konsole", vec!["-e", command]),
    ];

    for (terminal, args) in &terminals {
        if Command::new(terminal).args(args).spawn().is_ok() {
            break;
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn open_terminal(_command: &str) {
    eprintln!("Visual debug mode not supported on this platform");
}
